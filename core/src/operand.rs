use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of positional operands a command accepts.
///
/// # Examples
///
/// ```
/// use argfence_core::OperandArity;
///
/// let arity = OperandArity::Range(1, 4);
/// assert!(arity.accepts(1));
/// assert!(arity.accepts(4));
/// assert!(!arity.accepts(0));
/// assert!(!arity.accepts(5));
///
/// assert!(OperandArity::ExactlyOrZero(2).accepts(0));
/// assert!(!OperandArity::ExactlyOrZero(2).accepts(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OperandArity {
    /// No operands.
    #[default]
    None,
    /// Exactly `n` operands.
    Exactly(usize),
    /// Either no operands or exactly `n`.
    ExactlyOrZero(usize),
    /// Between `min` and `max` operands, inclusive.
    Range(usize, usize),
}

impl OperandArity {
    /// Returns `true` if `count` operands satisfy this rule.
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Self::None => count == 0,
            Self::Exactly(n) => count == n,
            Self::ExactlyOrZero(n) => count == 0 || count == n,
            Self::Range(min, max) => (min..=max).contains(&count),
        }
    }
}

impl fmt::Display for OperandArity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("no operands"),
            Self::Exactly(n) => write!(f, "exactly {n}"),
            Self::ExactlyOrZero(n) => write!(f, "exactly {n} or none"),
            Self::Range(min, max) => write!(f, "between {min} and {max}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_accepts_only_zero() {
        assert!(OperandArity::None.accepts(0));
        assert!(!OperandArity::None.accepts(1));
    }

    #[test]
    fn test_exactly() {
        assert!(OperandArity::Exactly(3).accepts(3));
        assert!(!OperandArity::Exactly(3).accepts(0));
        assert!(!OperandArity::Exactly(3).accepts(1));
    }

    #[test]
    fn test_empty_range_accepts_nothing() {
        let arity = OperandArity::Range(3, 1);
        assert!((0..5).all(|n| !arity.accepts(n)));
    }
}

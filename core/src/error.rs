//! Error types for command resolution, parsing and validation.

use thiserror::Error;

use crate::{OperandArity, OptionSchema};

/// Errors raised while resolving and processing an argument list.
///
/// Commands are identified by their name path and options by value, so
/// errors can outlive the [`Program`](crate::Program) that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No registered command's name path prefixes the arguments.
    #[error("command not found: '{}'", .arguments.join(" "))]
    CommandNotFound { arguments: Vec<String> },

    /// Operand count violates the command's arity rule.
    #[error(
        "invalid number of operands for '{}': expected {arity}, got {}",
        display_path(.command),
        .operands.len()
    )]
    InvalidNumberOfOperands {
        command: Vec<String>,
        arity: OperandArity,
        operands: Vec<String>,
    },

    /// An option requiring an argument was not followed by a value.
    #[error(
        "missing argument for option '--{}' of command '{}'",
        .option.name,
        display_path(.command)
    )]
    MissingOptionArgument {
        command: Vec<String>,
        option: OptionSchema,
    },

    /// Mandatory options absent after parsing. Lists every offender.
    #[error(
        "missing required option(s) {} for command '{}'",
        display_options(.options),
        display_path(.command)
    )]
    MissingOptions {
        command: Vec<String>,
        options: Vec<OptionSchema>,
    },
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(" ")
    }
}

fn display_options(options: &[OptionSchema]) -> String {
    options
        .iter()
        .map(|o| format!("'{}'", o.long_form()))
        .collect::<Vec<_>>()
        .join(", ")
}

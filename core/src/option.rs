//! Option declarations and the values parsed for them.

use serde::{Deserialize, Serialize};

use crate::lexical::{is_long_option_name, is_short_option_name};

/// How an option treats the token that follows it.
///
/// # Examples
///
/// ```
/// use argfence_core::OptionArgument;
///
/// let level = OptionArgument::Optional(Some("1".into()));
/// assert!(level.accepts_argument());
/// assert!(!OptionArgument::None.accepts_argument());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionArgument {
    /// Plain flag. The following token is never consumed.
    None,
    /// Takes the following token if it is not an option name, otherwise
    /// records the default (which may be absent).
    Optional(Option<String>),
    /// Must be followed by a non-option token.
    Required,
}

impl OptionArgument {
    /// Returns `true` if a following token may be consumed as the value.
    pub fn accepts_argument(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Declaration of one option accepted by a command.
///
/// `name` is the long form without dashes and is unique within its command;
/// `short` is an optional single alphanumeric alias.
///
/// # Examples
///
/// ```
/// use argfence_core::{OptionArgument, OptionSchema};
///
/// let path = OptionSchema::required("path", OptionArgument::Required).with_short('p');
/// assert!(path.matches("--path"));
/// assert!(path.matches("-p"));
/// assert!(!path.matches("--path=."));
/// assert!(!path.matches("path"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSchema {
    /// Long name without the leading `--` (e.g. "verbose").
    pub name: String,
    /// Short alias without the leading `-` (e.g. 'v').
    pub short: Option<char>,
    /// Whether the option must be present after parsing.
    pub required: bool,
    /// Argument policy.
    pub argument: OptionArgument,
}

impl OptionSchema {
    /// Creates an option that may be omitted.
    pub fn optional(name: &str, argument: OptionArgument) -> Self {
        Self {
            name: name.to_string(),
            short: None,
            required: false,
            argument,
        }
    }

    /// Creates an option that must appear in every invocation.
    pub fn required(name: &str, argument: OptionArgument) -> Self {
        Self {
            required: true,
            ..Self::optional(name, argument)
        }
    }

    /// Creates an optional plain flag.
    pub fn flag(name: &str) -> Self {
        Self::optional(name, OptionArgument::None)
    }

    /// Sets the short alias.
    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Returns the long form, e.g. `--verbose`.
    pub fn long_form(&self) -> String {
        format!("--{}", self.name)
    }

    /// Returns the short form, e.g. `-v`, if an alias is declared.
    pub fn short_form(&self) -> Option<String> {
        self.short.map(|c| format!("-{c}"))
    }

    /// Checks whether `token` names this option.
    ///
    /// A token that is not syntactically an option name never matches,
    /// whatever its text.
    pub fn matches(&self, token: &str) -> bool {
        if is_short_option_name(token) {
            let mut chars = token[1..].chars();
            return self.short.is_some() && chars.next() == self.short && chars.next().is_none();
        }
        if is_long_option_name(token) {
            return token[2..] == self.name;
        }
        false
    }
}

/// A value recorded for an option during parsing.
///
/// `value` is absent for plain flags and for optional-argument options that
/// had neither a following token nor a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValue {
    /// Name of the option that produced this value.
    pub name: String,
    /// Recorded argument, if any.
    pub value: Option<String>,
}

impl OptionValue {
    /// Creates a value entry.
    pub fn new(name: &str, value: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }

    /// Creates an entry without a value.
    pub fn flag(name: &str) -> Self {
        Self::new(name, None)
    }
}

/// Lookup helpers over a parsed option value list.
///
/// Entries are matched to options by name.
///
/// # Examples
///
/// ```
/// use argfence_core::{OptionArgument, OptionSchema, OptionValue, OptionValues};
///
/// let path = OptionSchema::optional("path", OptionArgument::Required);
/// let help = OptionSchema::flag("help");
/// let values = vec![OptionValue::new("path", Some(".".into())), OptionValue::flag("help")];
///
/// assert_eq!(values.argument(&path), Some("."));
/// assert!(values.has(&help));
/// assert_eq!(values.argument(&help), None);
/// ```
pub trait OptionValues {
    /// Returns the first entry recorded for `option`.
    fn value_of(&self, option: &OptionSchema) -> Option<&OptionValue>;

    /// Returns `true` if `option` was recorded.
    fn has(&self, option: &OptionSchema) -> bool {
        self.value_of(option).is_some()
    }

    /// Returns the text recorded for `option`, if any.
    fn argument(&self, option: &OptionSchema) -> Option<&str> {
        self.value_of(option).and_then(|v| v.value.as_deref())
    }
}

impl OptionValues for [OptionValue] {
    fn value_of(&self, option: &OptionSchema) -> Option<&OptionValue> {
        self.iter().find(|v| v.name == option.name)
    }
}

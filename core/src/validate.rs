//! Command and program validation.
//!
//! Catches schema mistakes that would otherwise make parsing ambiguous:
//! malformed option names or aliases, duplicate options within a command,
//! and duplicate command name paths within a program.
//!
//! # Examples
//!
//! ```
//! use argfence_core::*;
//!
//! let command = Command::new(["init"]).with_option(OptionSchema::flag("bare"));
//! assert!(validate_command(&command).is_empty());
//!
//! // Invalid: alias must be a single alphanumeric character
//! let bad = Command::new(["init"]).with_option(OptionSchema::flag("bare").with_short('-'));
//! assert!(!validate_command(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::Command;
use crate::lexical::is_long_option_name;

/// Schema validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two commands share the same name path.
    #[error("duplicate command: '{0}'")]
    DuplicateCommand(String),
    /// Option name is not a letter followed by letters or digits.
    #[error("invalid option name: {0:?}")]
    InvalidOptionName(String),
    /// Short alias is not a single alphanumeric character.
    #[error("invalid short alias {alias:?} for option '--{option}'")]
    InvalidShortAlias { option: String, alias: char },
    /// Two options in the same command share a name.
    #[error("duplicate option '--{option}' in command '{command}'")]
    DuplicateOption { command: String, option: String },
    /// Two options in the same command share a short alias.
    #[error("duplicate short alias '-{alias}' in command '{command}'")]
    DuplicateShortAlias { command: String, alias: char },
}

/// Validates every command of a program, then checks that name paths are
/// unique.
///
/// Stops at the first command with errors.
///
/// # Examples
///
/// ```
/// use argfence_core::*;
///
/// let commands = vec![Command::new(["init"]), Command::new(["init"])];
/// let errors = validate_program(&commands);
/// assert_eq!(errors, vec![ValidationError::DuplicateCommand("init".into())]);
/// ```
pub fn validate_program(commands: &[Command]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_paths: HashSet<&[String]> = HashSet::new();

    for command in commands {
        if !seen_paths.insert(command.name_path.as_slice()) {
            errors.push(ValidationError::DuplicateCommand(command.display_name()));
            return errors;
        }
        errors.extend(validate_command(command));
        if !errors.is_empty() {
            return errors;
        }
    }

    errors
}

/// Validates the options of one command.
pub fn validate_command(command: &Command) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();
    let mut aliases = HashSet::new();

    for option in &command.options {
        if !is_long_option_name(&option.long_form()) {
            errors.push(ValidationError::InvalidOptionName(option.name.clone()));
            return errors;
        }
        if !names.insert(option.name.as_str()) {
            errors.push(ValidationError::DuplicateOption {
                command: command.display_name(),
                option: option.name.clone(),
            });
            return errors;
        }

        let Some(alias) = option.short else {
            continue;
        };
        if !alias.is_ascii_alphanumeric() {
            errors.push(ValidationError::InvalidShortAlias {
                option: option.name.clone(),
                alias,
            });
            return errors;
        }
        if !aliases.insert(alias) {
            errors.push(ValidationError::DuplicateShortAlias {
                command: command.display_name(),
                alias,
            });
            return errors;
        }
    }

    errors
}

//! Command declarations and the argument parsing state machine.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{ParseError, Result};
use crate::lexical::is_option_name;
use crate::{OperandArity, OptionArgument, OptionSchema, OptionValue, Program};

/// Callback run by [`Program::run`] once arguments have been validated.
///
/// Receives the program, the resolved command, the operands and the option
/// values, in that order.
pub type Handler = Arc<dyn Fn(&Program, &Command, &[String], &[OptionValue]) + Send + Sync>;

/// Operands and option values produced by [`Command::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    /// Positional operands, in input order.
    pub operands: Vec<String>,
    /// Option values, in the order their options were completed.
    pub options: Vec<OptionValue>,
}

/// An invocable command.
///
/// The name path is the sequence of words that selects the command
/// (`["remote", "add"]`); an empty path is the root command.
///
/// # Examples
///
/// ```
/// use argfence_core::{Command, OperandArity, OptionArgument, OptionSchema, OptionValues};
///
/// let path = OptionSchema::optional("path", OptionArgument::Required).with_short('p');
/// let command = Command::new(["init"])
///     .with_arity(OperandArity::ExactlyOrZero(1))
///     .with_option(OptionSchema::flag("bare"))
///     .with_option(path.clone());
///
/// let parsed = command.process(&["-p", "./repo", "name"]).unwrap();
/// assert_eq!(parsed.operands, vec!["name"]);
/// assert_eq!(parsed.options.argument(&path), Some("./repo"));
/// ```
#[derive(Clone)]
pub struct Command {
    /// Words selecting this command.
    pub name_path: Vec<String>,
    /// Accepted operand count.
    pub arity: OperandArity,
    /// Declared options, names unique within the command.
    pub options: Vec<OptionSchema>,
    /// Callback run on a successful [`Program::run`].
    pub handler: Handler,
}

impl Command {
    /// Creates a command with no operands, no options and a no-op handler.
    pub fn new<I, S>(name_path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name_path: name_path.into_iter().map(Into::into).collect(),
            arity: OperandArity::None,
            options: Vec::new(),
            handler: Arc::new(ignore),
        }
    }

    /// Creates the root command (empty name path).
    pub fn root() -> Self {
        Self::new(Vec::<String>::new())
    }

    /// Sets the operand arity.
    pub fn with_arity(mut self, arity: OperandArity) -> Self {
        self.arity = arity;
        self
    }

    /// Adds an option.
    pub fn with_option(mut self, option: OptionSchema) -> Self {
        self.options.push(option);
        self
    }

    /// Sets the handler.
    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Program, &Command, &[String], &[OptionValue]) + Send + Sync + 'static,
    {
        self.handler = Arc::new(handler);
        self
    }

    /// Returns the name path joined with spaces.
    pub fn display_name(&self) -> String {
        self.name_path.join(" ")
    }

    /// Finds the declared option named by `argument`.
    ///
    /// Returns `None` if `argument` is not an option name or no declared
    /// option matches it.
    pub fn find_option(&self, argument: &str) -> Option<&OptionSchema> {
        self.options.iter().find(|option| option.matches(argument))
    }

    /// Parses then validates `arguments`.
    ///
    /// Operand arity is checked before required options.
    pub fn process<S: AsRef<str>>(&self, arguments: &[S]) -> Result<ParsedArguments> {
        let parsed = self.parse(arguments)?;
        self.validate_operands(&parsed.operands)?;
        self.validate_required_options(&parsed.options)?;
        Ok(parsed)
    }

    /// Splits `arguments` into operands and option values.
    ///
    /// Single pass with one token of lookahead: an option name becomes the
    /// pending option, and the next token decides whether it is consumed as
    /// that option's value. Option names that match no declared option are
    /// dropped.
    ///
    /// # Errors
    ///
    /// [`ParseError::MissingOptionArgument`] if an option requiring an
    /// argument is followed by another option name or ends the input.
    pub fn parse<S: AsRef<str>>(&self, arguments: &[S]) -> Result<ParsedArguments> {
        let mut parsed = ParsedArguments::default();
        let mut pending: Option<&OptionSchema> = None;

        for argument in arguments.iter().map(AsRef::<str>::as_ref) {
            let looks_like_option = is_option_name(argument);

            if let Some(option) = pending.take() {
                if !looks_like_option {
                    match option.argument {
                        OptionArgument::Required | OptionArgument::Optional(_) => {
                            self.record(&mut parsed, option, Some(argument.to_string()));
                        }
                        OptionArgument::None => {
                            self.record(&mut parsed, option, None);
                            parsed.operands.push(argument.to_string());
                        }
                    }
                    continue;
                }
                self.complete_without_argument(&mut parsed, option)?;
            }

            if looks_like_option {
                pending = self.find_option(argument);
                if pending.is_none() {
                    debug!(
                        command = %self.display_name(),
                        argument,
                        "dropping unrecognized option"
                    );
                }
            } else {
                parsed.operands.push(argument.to_string());
            }
        }

        if let Some(option) = pending {
            self.complete_without_argument(&mut parsed, option)?;
        }

        Ok(parsed)
    }

    /// Checks the operand count against the command's arity.
    pub fn validate_operands(&self, operands: &[String]) -> Result<()> {
        if self.arity.accepts(operands.len()) {
            return Ok(());
        }
        Err(ParseError::InvalidNumberOfOperands {
            command: self.name_path.clone(),
            arity: self.arity,
            operands: operands.to_vec(),
        })
    }

    /// Checks that every required option has a value entry.
    ///
    /// All missing options are reported together, in declaration order.
    pub fn validate_required_options(&self, values: &[OptionValue]) -> Result<()> {
        let missing: Vec<OptionSchema> = self
            .options
            .iter()
            .filter(|option| option.required && !values.iter().any(|v| v.name == option.name))
            .cloned()
            .collect();

        if missing.is_empty() {
            return Ok(());
        }
        Err(ParseError::MissingOptions {
            command: self.name_path.clone(),
            options: missing,
        })
    }

    fn complete_without_argument(
        &self,
        parsed: &mut ParsedArguments,
        option: &OptionSchema,
    ) -> Result<()> {
        let value = match &option.argument {
            OptionArgument::None => None,
            OptionArgument::Optional(default) => default.clone(),
            OptionArgument::Required => {
                return Err(ParseError::MissingOptionArgument {
                    command: self.name_path.clone(),
                    option: option.clone(),
                });
            }
        };
        self.record(parsed, option, value);
        Ok(())
    }

    fn record(&self, parsed: &mut ParsedArguments, option: &OptionSchema, value: Option<String>) {
        trace!(option = %option.name, value = ?value, "recorded option value");
        parsed.options.push(OptionValue::new(&option.name, value));
    }
}

fn ignore(_: &Program, _: &Command, _: &[String], _: &[OptionValue]) {}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name_path", &self.name_path)
            .field("arity", &self.arity)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

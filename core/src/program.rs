//! Command registry and top-level dispatch.

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::validate::{ValidationError, validate_program};
use crate::{Command, ParsedArguments};

/// A validated, immutable set of commands.
///
/// # Examples
///
/// ```
/// use argfence_core::{Command, OperandArity, Program};
///
/// let program = Program::new(vec![
///     Command::new(["init"]).with_arity(OperandArity::ExactlyOrZero(1)),
///     Command::new(["init", "package"]).with_arity(OperandArity::Exactly(1)),
/// ])
/// .unwrap();
///
/// let command = program.resolve(&["init", "package", "name"]).unwrap();
/// assert_eq!(command.name_path, vec!["init", "package"]);
/// assert!(program.run(&["init", "package", "name"]).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Program {
    commands: Vec<Command>,
}

impl Program {
    /// Creates a program from its commands.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, e.g. two commands with
    /// the same name path.
    pub fn new(commands: Vec<Command>) -> std::result::Result<Self, ValidationError> {
        if let Some(error) = validate_program(&commands).into_iter().next() {
            return Err(error);
        }
        Ok(Self { commands })
    }

    /// Registered commands, in registration order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Finds the command whose name path is the longest word-for-word prefix
    /// of `arguments`.
    ///
    /// The root command (empty path) matches any input.
    ///
    /// # Errors
    ///
    /// [`ParseError::CommandNotFound`] if no name path prefixes the input.
    pub fn resolve<S: AsRef<str>>(&self, arguments: &[S]) -> Result<&Command> {
        let resolved = self
            .commands
            .iter()
            .filter(|command| is_prefix(&command.name_path, arguments))
            .max_by_key(|command| command.name_path.len());

        match resolved {
            Some(command) => {
                debug!(command = %command.display_name(), "resolved command");
                Ok(command)
            }
            None => Err(ParseError::CommandNotFound {
                arguments: arguments.iter().map(|a| a.as_ref().to_string()).collect(),
            }),
        }
    }

    /// Resolves a command, processes the arguments that follow its name
    /// path, and runs its handler.
    pub fn run<S: AsRef<str>>(&self, arguments: &[S]) -> Result<()> {
        let command = self.resolve(arguments)?;
        let ParsedArguments { operands, options } =
            command.process(&arguments[command.name_path.len()..])?;
        (command.handler)(self, command, &operands, &options);
        Ok(())
    }
}

fn is_prefix<S: AsRef<str>>(path: &[String], arguments: &[S]) -> bool {
    path.len() <= arguments.len()
        && path
            .iter()
            .zip(arguments)
            .all(|(word, argument)| word == argument.as_ref())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{OperandArity, OptionArgument, OptionSchema, OptionValue};

    fn program() -> Program {
        Program::new(vec![
            Command::new(["init"]),
            Command::new(["init", "package"]),
            Command::new(["clone"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_longest_path() {
        let program = program();

        let command = program.resolve(&["init", "package", "name"]).unwrap();
        assert_eq!(command.name_path, vec!["init", "package"]);

        let command = program.resolve(&["init", "other"]).unwrap();
        assert_eq!(command.name_path, vec!["init"]);
    }

    #[test]
    fn test_resolve_is_literal() {
        let program = program();

        assert_eq!(
            program.resolve(&["--init"]).unwrap_err(),
            ParseError::CommandNotFound {
                arguments: vec!["--init".into()],
            }
        );
        assert!(program.resolve(&["pkg", "init"]).is_err());
        assert!(program.resolve::<&str>(&[]).is_err());
    }

    #[test]
    fn test_resolve_root_fallback() {
        let program = Program::new(vec![Command::root(), Command::new(["init"])]).unwrap();

        assert!(program.resolve::<&str>(&[]).unwrap().name_path.is_empty());
        assert!(program.resolve(&["status"]).unwrap().name_path.is_empty());
        assert_eq!(program.resolve(&["init"]).unwrap().name_path, vec!["init"]);
    }

    #[test]
    fn test_new_rejects_duplicate_paths() {
        let result = Program::new(vec![Command::new(["init"]), Command::new(["init"])]);
        assert_eq!(
            result.unwrap_err(),
            ValidationError::DuplicateCommand("init".into())
        );
    }

    #[test]
    fn test_run_strips_name_path_and_invokes_handler() {
        let calls: Arc<Mutex<Vec<(Vec<String>, Vec<String>, Vec<OptionValue>)>>> =
            Arc::default();
        let sink = Arc::clone(&calls);
        let branch = OptionSchema::optional("branch", OptionArgument::Required).with_short('b');

        let program = Program::new(vec![
            Command::new(["remote", "add"])
                .with_arity(OperandArity::Exactly(2))
                .with_option(branch)
                .with_handler(move |program, command, operands, options| {
                    assert_eq!(program.commands().len(), 1);
                    sink.lock().unwrap().push((
                        command.name_path.clone(),
                        operands.to_vec(),
                        options.to_vec(),
                    ));
                }),
        ])
        .unwrap();

        program
            .run(&["remote", "add", "origin", "-b", "main", "git@host:repo"])
            .unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, vec!["remote", "add"]);
        assert_eq!(calls[0].1, vec!["origin", "git@host:repo"]);
        assert_eq!(calls[0].2, vec![OptionValue::new("branch", Some("main".into()))]);
    }

    #[test]
    fn test_run_does_not_invoke_handler_on_error() {
        let called = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&called);
        let program = Program::new(vec![Command::new(["init"]).with_handler(
            move |_, _, _, _| {
                *flag.lock().unwrap() = true;
            },
        )])
        .unwrap();

        let err = program.run(&["init", "extra"]).unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumberOfOperands { .. }));
        assert!(!*called.lock().unwrap());
    }
}

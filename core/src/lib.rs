//! Declarative command-line argument resolution and validation.
//!
//! This crate turns a raw argument vector into validated operands and option
//! values for one of a set of declared commands:
//!
//! - [`Program`] — validated registry of commands; resolves the command whose
//!   name path is the longest prefix of the arguments and runs its handler.
//! - [`Command`] — name path, [`OperandArity`], declared options and a
//!   [`Handler`]; owns the parsing state machine.
//! - [`OptionSchema`] — a `--name`/`-n` option with an [`OptionArgument`]
//!   policy.
//! - [`OptionValue`] — a value recorded for an option; look values up with
//!   the [`OptionValues`] extension trait.
//!
//! Every failure is a [`ParseError`]; schema mistakes (duplicate command
//! paths, malformed option names) are [`ValidationError`]s raised when the
//! [`Program`] is built.
//!
//! # Example
//!
//! ```
//! use argfence_core::*;
//!
//! let message = OptionSchema::required("message", OptionArgument::Required).with_short('m');
//! let program = Program::new(vec![
//!     Command::root().with_option(OptionSchema::flag("version").with_short('V')),
//!     Command::new(["commit"])
//!         .with_option(message.clone())
//!         .with_option(OptionSchema::flag("all").with_short('a')),
//! ])
//! .unwrap();
//!
//! let command = program.resolve(&["commit", "-a", "-m", "fix"]).unwrap();
//! let parsed = command.process(&["-a", "-m", "fix"]).unwrap();
//! assert_eq!(parsed.options.argument(&message), Some("fix"));
//!
//! let err = program.run(&["commit", "-a"]).unwrap_err();
//! assert!(matches!(err, ParseError::MissingOptions { .. }));
//! ```

mod command;
mod error;
pub mod lexical;
mod operand;
mod option;
mod program;
mod validate;

pub use command::{Command, Handler, ParsedArguments};
pub use error::{ParseError, Result};
pub use operand::OperandArity;
pub use option::{OptionArgument, OptionSchema, OptionValue, OptionValues};
pub use program::Program;
pub use validate::{ValidationError, validate_command, validate_program};

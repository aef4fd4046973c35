//! A minimal interactive command interpreter.
//!
//! `ccs` reads one line at a time from standard input, splits it into
//! whitespace-delimited tokens, and either runs one of five built-in
//! commands (`cd`, `help`, `exit`, `pwd`, `ls`) in-process or launches the
//! named external program and waits for it to finish. There is no shell
//! grammar: no pipes, redirection, quoting, variable expansion or job
//! control. A line is a command name plus arguments, nothing more.
//!
//! The main entry point is [`Interpreter`], which owns the built-in table
//! and drives the read-eval loop. The [`lexer`] module and the [`Builtin`]
//! trait are public so the pieces can be exercised individually.

mod builtin;
pub mod command;
mod external;
mod interpreter;
pub mod lexer;

pub use builtin::BUILTIN_NAMES;
pub use command::{Builtin, Status};
pub use interpreter::Interpreter;

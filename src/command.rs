use anyhow::Result;
use std::io::Write;

/// Signal telling the read-eval loop whether to keep going.
///
/// Every dispatched action, built-in or external, produces one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Keep prompting for the next line.
    Continue,
    /// Stop the loop; the process then terminates with success.
    Exit,
}

/// A command built into the interpreter and executed in-process.
///
/// Implementations receive the full token sequence of the line, with the
/// command name itself at index 0.
pub trait Builtin {
    /// Canonical name of the command, e.g. "cd" or "pwd".
    fn name(&self) -> &'static str;

    /// Executes the command.
    ///
    /// Expected failures (a bad path, a missing argument) are reported on
    /// `stderr` and yield `Ok(Status::Continue)`. `Err` is reserved for
    /// failures of the streams themselves.
    fn execute(
        &self,
        tokens: &[&str],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Status>;
}

use crate::command::Status;
use anyhow::{Context, Result};
use std::io::Write;
use std::process::Command;

/// Launch `argv` as a child process and wait for it to finish.
///
/// Argument 0 is the program name as typed; lookup goes through the
/// platform's usual executable search. The child inherits the interpreter's
/// standard streams. A spawn failure (unknown program, permission problem)
/// is reported on `stderr` and the loop continues.
///
/// The wait returns only once the child has actually exited or been killed
/// by a signal; a merely stopped child keeps the interpreter blocked. The
/// exit status itself is not inspected.
pub(crate) fn run(argv: &[&str], stderr: &mut dyn Write) -> Result<Status> {
    let Some((program, args)) = argv.split_first() else {
        return Ok(Status::Continue);
    };
    match Command::new(program).args(args).spawn() {
        Ok(mut child) => {
            child.wait().context("waiting for child process")?;
        }
        Err(e) => {
            writeln!(stderr, "ccs: {}", e)?;
        }
    }
    Ok(Status::Continue)
}

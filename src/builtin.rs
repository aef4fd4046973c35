use crate::command::{Builtin, Status};
use crate::external;
use anyhow::Result;
use std::env;
use std::io::Write;
use std::path::Path;

/// Names of all built-in commands, in dispatch order.
///
/// This is the single source of truth for the table: registration in
/// [`default_builtins`] and the `help` listing both follow it.
pub const BUILTIN_NAMES: [&str; 5] = ["cd", "help", "exit", "pwd", "ls"];

/// Builds the built-in table, one action per entry of [`BUILTIN_NAMES`].
///
/// Constructed once when the interpreter starts and never modified
/// afterwards.
pub(crate) fn default_builtins() -> Vec<Box<dyn Builtin>> {
    vec![
        Box::new(Cd),
        Box::new(Help),
        Box::new(Exit),
        Box::new(Pwd),
        Box::new(Ls),
    ]
}

/// Change the current working directory to the first argument.
pub struct Cd;

impl Builtin for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(
        &self,
        tokens: &[&str],
        _stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Status> {
        match tokens.get(1) {
            None => writeln!(stderr, "ccs: expected argument to \"cd\"")?,
            Some(target) => {
                if let Err(e) = env::set_current_dir(Path::new(target)) {
                    writeln!(stderr, "ccs: {}", e)?;
                }
            }
        }
        Ok(Status::Continue)
    }
}

/// Print the banner and the list of built-in commands.
pub struct Help;

impl Builtin for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(
        &self,
        _tokens: &[&str],
        stdout: &mut dyn Write,
        _stderr: &mut dyn Write,
    ) -> Result<Status> {
        writeln!(stdout, "ccs: a small command interpreter")?;
        writeln!(stdout, "Type program names and arguments, then press enter.")?;
        writeln!(stdout, "The following commands are built in:")?;
        for name in BUILTIN_NAMES {
            writeln!(stdout, "  {}", name)?;
        }
        writeln!(stdout, "Use the man command for information on other programs.")?;
        Ok(Status::Continue)
    }
}

/// Stop the read-eval loop. Trailing tokens are ignored.
pub struct Exit;

impl Builtin for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(
        &self,
        _tokens: &[&str],
        _stdout: &mut dyn Write,
        _stderr: &mut dyn Write,
    ) -> Result<Status> {
        Ok(Status::Exit)
    }
}

/// Print the absolute current working directory.
pub struct Pwd;

impl Builtin for Pwd {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(
        &self,
        _tokens: &[&str],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Status> {
        match env::current_dir() {
            Ok(dir) => writeln!(stdout, "{}", dir.display())?,
            Err(e) => writeln!(stderr, "ccs: {}", e)?,
        }
        Ok(Status::Continue)
    }
}

/// Run the external `ls` program on the given arguments.
///
/// Registered as a built-in for historical reasons, but it launches a child
/// through the generic launcher like any unrecognized command, with
/// argument 0 pinned to the literal `ls`.
pub struct Ls;

impl Builtin for Ls {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(
        &self,
        tokens: &[&str],
        _stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Status> {
        let argv: Vec<&str> = std::iter::once("ls")
            .chain(tokens.iter().skip(1).copied())
            .collect();
        external::run(&argv, stderr)
    }
}

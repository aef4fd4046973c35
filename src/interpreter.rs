use crate::builtin::default_builtins;
use crate::command::{Builtin, Status};
use crate::external;
use crate::lexer;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, IsTerminal, Write};

/// Prompt printed before each line is read.
const PROMPT: &str = "$ ";

/// The interactive command interpreter: a read-eval loop over standard
/// input.
///
/// The interpreter holds the built-in table, fixed at construction time.
/// Each loop iteration reads a line, tokenizes it, and dispatches the
/// tokens to a built-in or to the external-command launcher, blocking until
/// the action completes.
pub struct Interpreter {
    builtins: Vec<Box<dyn Builtin>>,
}

impl Interpreter {
    /// Create an interpreter with a custom built-in table.
    pub fn new(builtins: Vec<Box<dyn Builtin>>) -> Self {
        Self { builtins }
    }

    /// Tokenize one line of input and dispatch it.
    pub fn eval_line(
        &mut self,
        line: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Status> {
        let tokens = lexer::tokenize(line);
        self.dispatch(&tokens, stdout, stderr)
    }

    /// Dispatch a token sequence.
    ///
    /// The first token picks a built-in from the table by exact,
    /// case-sensitive match in registration order; anything else is handed
    /// to the external-command launcher with the full token sequence as its
    /// argument vector. An empty sequence is a no-op.
    pub fn dispatch(
        &mut self,
        tokens: &[&str],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Status> {
        let Some(command) = tokens.first() else {
            return Ok(Status::Continue);
        };
        for builtin in &self.builtins {
            if builtin.name() == *command {
                return builtin.execute(tokens, stdout, stderr);
            }
        }
        external::run(tokens, stderr)
    }

    /// Run the read-eval loop until `exit` or end of input.
    ///
    /// On a terminal the loop uses a line editor with in-memory history;
    /// otherwise lines come straight from standard input, with the prompt
    /// still printed before each read. End of input ends the loop and the
    /// process then terminates with success.
    pub fn repl(&mut self) -> Result<()> {
        if io::stdin().is_terminal() {
            self.repl_editor()
        } else {
            self.repl_plain()
        }
    }

    fn repl_editor(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    if self.eval_reported(&line) == Status::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn repl_plain(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("{}", PROMPT);
            io::stdout().flush()?;
            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            if self.eval_reported(&line) == Status::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Evaluate a line against the real process streams, reporting a
    /// stream-level failure instead of tearing the loop down.
    fn eval_reported(&mut self, line: &str) -> Status {
        match self.eval_line(line, &mut io::stdout(), &mut io::stderr()) {
            Ok(status) => status,
            Err(e) => {
                eprintln!("ccs: {}", e);
                Status::Continue
            }
        }
    }
}

impl Default for Interpreter {
    /// An interpreter with the standard built-in table:
    /// `cd`, `help`, `exit`, `pwd`, `ls`.
    fn default() -> Self {
        Self::new(default_builtins())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::BUILTIN_NAMES;

    fn dispatch(tokens: &[&str]) -> (Status, String, String) {
        let mut interp = Interpreter::default();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = interp.dispatch(tokens, &mut out, &mut err).unwrap();
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_default_table_matches_registered_names() {
        let interp = Interpreter::default();
        let names: Vec<&str> = interp.builtins.iter().map(|b| b.name()).collect();
        assert_eq!(names, BUILTIN_NAMES);
    }

    #[test]
    fn test_empty_token_sequence_is_a_silent_no_op() {
        let (status, out, err) = dispatch(&[]);
        assert_eq!(status, Status::Continue);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_delimiter_only_line_dispatches_to_nothing() {
        let mut interp = Interpreter::default();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = interp
            .eval_line(" \t \x07 \n", &mut out, &mut err)
            .unwrap();
        assert_eq!(status, Status::Continue);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_exit_line_stops_the_loop() {
        let (status, _, _) = dispatch(&["exit"]);
        assert_eq!(status, Status::Exit);
    }

    #[test]
    fn test_builtin_match_is_case_sensitive() {
        // "EXIT" is not a built-in, so it reaches the launcher and fails
        // to spawn; the loop keeps going either way.
        let (status, _, err) = dispatch(&["EXIT"]);
        assert_eq!(status, Status::Continue);
        assert!(err.starts_with("ccs: "));
    }

    #[test]
    fn test_external_command_runs_and_continues() {
        let (status, _, err) = dispatch(&["true"]);
        assert_eq!(status, Status::Continue);
        assert!(err.is_empty());
    }

    #[test]
    fn test_unknown_command_reports_and_continues() {
        let (status, out, err) = dispatch(&["ccs-no-such-program-xyz", "arg"]);
        assert_eq!(status, Status::Continue);
        assert!(out.is_empty());
        assert!(err.starts_with("ccs: "));
    }

    #[test]
    fn test_help_goes_through_the_table() {
        let (status, out, _) = dispatch(&["help"]);
        assert_eq!(status, Status::Continue);
        for name in BUILTIN_NAMES {
            assert!(out.contains(name), "help output missing {name}");
        }
    }
}

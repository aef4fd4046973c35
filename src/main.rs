use anyhow::Result;
use ccs::Interpreter;

fn main() -> Result<()> {
    Interpreter::default().repl()
}

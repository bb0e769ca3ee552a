use std::ffi::OsString;
use std::io::Write;

use super::{Command, CommandError, Flow};

/// Stops the shell with status 0; operands are ignored.
#[derive(Clone, Copy, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _args: &[OsString], _out: &mut dyn Write) -> Result<Flow, CommandError> {
        Ok(Flow::Exit(0))
    }
}

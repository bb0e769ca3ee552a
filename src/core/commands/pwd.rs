use std::env;
use std::ffi::OsString;
use std::io::Write;

use super::{write_os, Command, CommandError, Flow};

#[derive(Clone, Copy, Default)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(&self, _args: &[OsString], out: &mut dyn Write) -> Result<Flow, CommandError> {
        let cwd = env::current_dir().map_err(CommandError::CurrentDir)?;
        write_os(out, cwd.as_os_str())?;
        writeln!(out)?;
        Ok(Flow::Continue)
    }
}

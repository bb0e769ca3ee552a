use std::ffi::OsString;
use std::io::Write;

use super::{write_os, Command, CommandError, Flow};

#[derive(Clone, Copy, Default)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, args: &[OsString], out: &mut dyn Write) -> Result<Flow, CommandError> {
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                out.write_all(b" ")?;
            }
            write_os(out, arg)?;
        }
        writeln!(out)?;
        Ok(Flow::Continue)
    }
}

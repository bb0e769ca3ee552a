use super::{Command, CommandError, Flow};
use crate::path::PathExpander;
use std::env;
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

#[derive(Clone, Default)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[OsString], _out: &mut dyn Write) -> Result<Flow, CommandError> {
        let path_str = args.first().ok_or(CommandError::MissingOperand("cd"))?;

        // The message names the resolved target, not the underlying error.
        let target = self
            .path_expander
            .expand(path_str)
            .map_err(|_| CommandError::NoSuchDirectory(path_str.to_string_lossy().into_owned()))?;
        debug!(target = %target.display(), "changing directory");

        env::set_current_dir(&target)
            .map_err(|_| CommandError::NoSuchDirectory(target.display().to_string()))?;
        Ok(Flow::Continue)
    }
}

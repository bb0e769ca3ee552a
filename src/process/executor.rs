use std::ffi::{OsStr, OsString};
use std::process::{Command, Stdio};

use tracing::debug;

use super::ProcessError;

/// Runs external programs attached to the shell's own standard streams.
#[derive(Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `program` with `args` and blocks until it exits.
    ///
    /// Any failure to start, to wait, or a non-success status is an error.
    pub fn spawn_process(&self, program: &OsStr, args: &[OsString]) -> Result<(), ProcessError> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = command.spawn().map_err(ProcessError::Spawn)?;
        debug!(?program, pid = child.id(), "spawned child");

        let status = child.wait().map_err(ProcessError::Wait)?;
        debug!(?program, %status, "child exited");

        if status.success() {
            Ok(())
        } else {
            Err(ProcessError::Status(status))
        }
    }
}

use std::fmt;
use std::process::ExitStatus;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    Spawn(std::io::Error),
    Wait(std::io::Error),
    Status(ExitStatus),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn(e) => write!(f, "failed to spawn: {}", e),
            ProcessError::Wait(e) => write!(f, "failed to wait: {}", e),
            ProcessError::Status(status) => write!(f, "exited unsuccessfully: {}", status),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Spawn(e) | ProcessError::Wait(e) => Some(e),
            ProcessError::Status(_) => None,
        }
    }
}

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::{self, Write};

use tracing::debug;

mod cd;
mod echo;
mod exit;
mod pwd;
mod type_cmd;

pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use pwd::PwdCommand;
pub use type_cmd::TypeCommand;

use crate::process::ProcessExecutor;

#[derive(Debug)]
pub enum CommandError {
    MissingOperand(&'static str),
    NoSuchDirectory(String),
    CurrentDir(std::io::Error),
    NotFound(String),
    IoError(std::io::Error),
}

impl CommandError {
    /// `not found` reports are part of the command's output, everything else
    /// is a diagnostic.
    pub fn reports_on_stdout(&self) -> bool {
        matches!(self, CommandError::NotFound(_))
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingOperand(cmd) => write!(f, "{}: missing operand", cmd),
            CommandError::NoSuchDirectory(path) => {
                write!(f, "cd: {}: No such file or directory", path)
            }
            CommandError::CurrentDir(err) => {
                write!(f, "pwd: error getting current directory: {}", err)
            }
            CommandError::NotFound(cmd) => write!(f, "{}: not found", cmd),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// What the loop does after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

pub trait Command {
    fn execute(&self, args: &[OsString], out: &mut dyn Write) -> Result<Flow, CommandError>;
}

/// Writes an OS string as-is, without a lossy UTF-8 round trip on Unix.
pub(crate) fn write_os(out: &mut dyn Write, text: &OsStr) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        out.write_all(text.as_bytes())
    }
    #[cfg(not(unix))]
    {
        out.write_all(text.to_string_lossy().as_bytes())
    }
}

/// The closed set of commands implemented by the shell itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Exit,
    Echo,
    Pwd,
    Cd,
    Type,
}

impl Builtin {
    pub const ALL: [Builtin; 5] = [
        Builtin::Exit,
        Builtin::Echo,
        Builtin::Pwd,
        Builtin::Cd,
        Builtin::Type,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exit" => Some(Builtin::Exit),
            "echo" => Some(Builtin::Echo),
            "pwd" => Some(Builtin::Pwd),
            "cd" => Some(Builtin::Cd),
            "type" => Some(Builtin::Type),
            _ => None,
        }
    }

    /// Builtin names are ASCII, so a non-UTF-8 name is never a builtin.
    pub fn from_os_name(name: &OsStr) -> Option<Self> {
        name.to_str().and_then(Builtin::from_name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Exit => "exit",
            Builtin::Echo => "echo",
            Builtin::Pwd => "pwd",
            Builtin::Cd => "cd",
            Builtin::Type => "type",
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Default)]
pub struct CommandExecutor {
    cd: CdCommand,
    type_cmd: TypeCommand,
    process_executor: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self {
            cd: CdCommand::new(),
            type_cmd: TypeCommand::new(),
            process_executor: ProcessExecutor::new(),
        }
    }

    pub fn execute(
        &self,
        command: &OsStr,
        args: &[OsString],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        match Builtin::from_os_name(command) {
            Some(builtin) => {
                debug!(%builtin, ?args, "running builtin");
                self.run_builtin(builtin, args, out)
            }
            None => {
                debug!(?command, ?args, "running external command");
                self.run_external(command, args, out)
            }
        }
    }

    fn run_builtin(
        &self,
        builtin: Builtin,
        args: &[OsString],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        match builtin {
            Builtin::Exit => ExitCommand.execute(args, out),
            Builtin::Echo => EchoCommand.execute(args, out),
            Builtin::Pwd => PwdCommand.execute(args, out),
            Builtin::Cd => self.cd.execute(args, out),
            Builtin::Type => self.type_cmd.execute(args, out),
        }
    }

    /// Every launch or exit failure is reported as `not found`.
    fn run_external(
        &self,
        command: &OsStr,
        args: &[OsString],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        out.flush()?;
        self.process_executor
            .spawn_process(command, args)
            .map_err(|err| {
                debug!(?command, error = %err, "external command failed");
                CommandError::NotFound(command.to_string_lossy().into_owned())
            })?;
        Ok(Flow::Continue)
    }
}

use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

mod executor;

use crate::{
    core::commands::{CommandExecutor, Flow},
    error::ShellError,
    input::{LineReader, ReadOutcome},
};

use executor::CommandHandler;
use tracing::{debug, warn};

pub const PROMPT: &str = "$ ";

/// The read-dispatch loop, generic over its streams.
pub struct Shell<R = StdinLock<'static>, O = Stdout, E = Stderr> {
    pub(crate) input: LineReader<R>,
    pub(crate) stdout: O,
    pub(crate) stderr: E,
    pub(crate) executor: CommandExecutor,
}

impl Shell {
    /// A shell attached to the process's standard streams.
    pub fn new() -> Self {
        Shell::with_io(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, O: Write, E: Write> Shell<R, O, E> {
    pub fn with_io(input: R, stdout: O, stderr: E) -> Self {
        Shell {
            input: LineReader::new(input),
            stdout,
            stderr,
            executor: CommandExecutor::new(),
        }
    }

    /// Runs until `exit` or end of input and returns the exit status.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        let code = loop {
            self.prompt();

            match self.input.read_line() {
                Ok(ReadOutcome::Line(line)) => {
                    if let Flow::Exit(code) = self.execute_command(&line) {
                        break code;
                    }
                }
                Ok(ReadOutcome::Eof) => {
                    debug!("end of input");
                    break 0;
                }
                Err(e) => {
                    self.report(&format!("Error reading input: {}", e));
                }
            }
        };

        self.stdout.flush()?;
        Ok(code)
    }

    pub fn into_streams(self) -> (O, E) {
        (self.stdout, self.stderr)
    }

    fn prompt(&mut self) {
        if let Err(e) = self
            .stdout
            .write_all(PROMPT.as_bytes())
            .and_then(|_| self.stdout.flush())
        {
            warn!(error = %e, "failed to write prompt");
        }
    }

    /// Writes a diagnostic line to stderr.
    pub(crate) fn report(&mut self, message: &str) {
        if let Err(e) = writeln!(self.stderr, "{}", message) {
            warn!(error = %e, "failed to write to stderr");
        }
    }

    /// Writes a result line to stdout.
    pub(crate) fn say(&mut self, message: &str) {
        if let Err(e) = writeln!(self.stdout, "{}", message) {
            warn!(error = %e, "failed to write to stdout");
        }
    }
}

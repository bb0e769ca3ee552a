use std::io::{BufRead, Write};

use crate::core::commands::Flow;
use crate::input::tokenize;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, command: &[u8]) -> Flow;
}

impl<R: BufRead, O: Write, E: Write> CommandHandler for super::Shell<R, O, E> {
    fn execute_command(&mut self, command: &[u8]) -> Flow {
        let tokens = tokenize(command);
        let Some((command_name, command_args)) = tokens.split_first() else {
            return Flow::Continue;
        };

        match self
            .executor
            .execute(command_name, command_args, &mut self.stdout)
        {
            Ok(flow) => flow,
            Err(e) => {
                if e.reports_on_stdout() {
                    self.say(&e.to_string());
                } else {
                    self.report(&e.to_string());
                }
                Flow::Continue
            }
        }
    }
}

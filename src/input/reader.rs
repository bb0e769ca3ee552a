use std::io::{self, BufRead};

#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(Vec<u8>),
    Eof,
}

/// Reads one line per call from a buffered source.
///
/// Lines are raw bytes; no encoding is assumed.
pub struct LineReader<R> {
    source: R,
    buffer: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            buffer: Vec::new(),
        }
    }

    /// Blocks until a full line, a final unterminated line, or end of input.
    pub fn read_line(&mut self) -> io::Result<ReadOutcome> {
        self.buffer.clear();
        match self.source.read_until(b'\n', &mut self.buffer)? {
            0 => Ok(ReadOutcome::Eof),
            _ => Ok(ReadOutcome::Line(std::mem::take(&mut self.buffer))),
        }
    }
}

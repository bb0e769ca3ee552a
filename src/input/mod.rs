mod reader;
mod tokenizer;

pub use reader::{LineReader, ReadOutcome};
pub use tokenizer::tokenize;

//! Tokenizer configurations: word, line, and paragraph strategies over the
//! one XY-cut engine.

mod lines;
mod paragraphs;
mod words;

pub use lines::{LineParams, LineStrategy};
pub use paragraphs::{ParagraphParams, ParagraphStrategy};
pub use words::{WordParams, WordStrategy};

//! Query surface: tokenizer and intent classification.

/// Intent classification over tokenized query text.
pub mod parser;
/// Word / quoted-literal tokenizer.
pub mod tokenizer;

pub use parser::{parse_query, QueryIntent};
pub use tokenizer::{tokenize, Segment, TokenizeError};

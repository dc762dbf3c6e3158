//! Utility modules for hostfetch.

mod tokenizer;

pub use tokenizer::{Delimiter, tokenize, tokenize_whitespace};

//! Delimiter-based tokenizer.
//!
//! Splitting collapses runs of the delimiter, so the result never contains
//! empty tokens: `"a::b"` on `':'` yields `["a", "b"]`.
//!
//! [`tokenize`] and [`Delimiter`] are public library API for callers that
//! split on something other than whitespace. The bundled parsers only need
//! [`tokenize_whitespace`].

/// A delimiter that [`tokenize`] can split on.
pub trait Delimiter {
    /// Splits `input` on maximal runs of this delimiter, dropping empty tokens.
    fn split_runs<'a>(&self, input: &'a str) -> Vec<&'a str>;
}

impl Delimiter for char {
    fn split_runs<'a>(&self, input: &'a str) -> Vec<&'a str> {
        input.split(*self).filter(|t| !t.is_empty()).collect()
    }
}

impl Delimiter for &str {
    fn split_runs<'a>(&self, input: &'a str) -> Vec<&'a str> {
        // An empty delimiter never matches, the input is one token.
        if self.is_empty() {
            return if input.is_empty() { Vec::new() } else { vec![input] };
        }
        input.split(*self).filter(|t| !t.is_empty()).collect()
    }
}

/// Splits `input` on `delim` into an ordered sequence of non-empty tokens.
///
/// Consecutive delimiters collapse into one, and leading or trailing
/// delimiters produce no tokens. The input is only borrowed.
pub fn tokenize<D: Delimiter>(input: &str, delim: D) -> Vec<&str> {
    delim.split_runs(input)
}

/// Splits `input` on runs of whitespace.
pub fn tokenize_whitespace(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

use std::iter::once;

/// The capability to split sequences into tokens.
///
/// Every call shape goes through [`tokenize_batch()`], which yields one token sequence per input
/// sequence in the order the sequences were provided.
///
/// [`tokenize_batch()`]: Tokenize::tokenize_batch
pub trait Tokenize {
    /// Tokenizes the sequences.
    fn tokenize_batch<I, S>(&self, sequences: I) -> Vec<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// Tokenizes a single sequence.
    fn tokenize(&self, sequence: impl AsRef<str>) -> Vec<String> {
        self.tokenize_batch(once(sequence))
            .pop()
            .unwrap_or_default()
    }
}

/// Splits the trimmed sequence on runs of whitespace.
///
/// An empty or whitespace-only sequence yields no tokens at all.
pub fn whitespace_tokenize(sequence: &str) -> impl Iterator<Item = &str> {
    sequence.split_whitespace()
}

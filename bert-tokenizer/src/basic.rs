use crate::{normalizer::Normalizer, pre_tokenizer::PreTokenizer, tokenize::Tokenize};

/// A Bert basic tokenizer.
///
/// Splits raw sequences into coarse tokens: CJK characters and punctuation become tokens of
/// their own and whitespace of any kind delimits tokens. Optionally lowercases the sequences and
/// strips their accents.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicTokenizer {
    pub(crate) normalizer: Normalizer,
    pub(crate) pre_tokenizer: PreTokenizer,
}

impl BasicTokenizer {
    /// Creates a basic tokenizer.
    ///
    /// Lowercasing also strips accents.
    pub fn new(lowercase: bool) -> Self {
        Self {
            normalizer: Normalizer::new(true, true, lowercase, lowercase),
            pre_tokenizer: PreTokenizer,
        }
    }

    pub(crate) fn split(&self, sequence: &str) -> Vec<String> {
        let sequence = self.normalizer.normalize(sequence);
        self.pre_tokenizer.pre_tokenize(&sequence)
    }
}

impl Tokenize for BasicTokenizer {
    fn tokenize_batch<I, S>(&self, sequences: I) -> Vec<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        sequences
            .into_iter()
            .map(|sequence| self.split(sequence.as_ref()))
            .collect()
    }
}

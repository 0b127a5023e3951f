use std::borrow::Cow;

use crate::{
    tokenize::{whitespace_tokenize, Tokenize},
    vocab::Vocabulary,
    SmallString,
};

/// A Bert word piece model.
///
/// Splits tokens greedily into the longest subwords which are part of the vocabulary. Subwords
/// which continue a word are marked by a prefix. A token which is too long or which can't be
/// completely covered by subwords is replaced by the unknown token.
#[derive(Debug)]
pub struct WordpieceTokenizer<N> {
    pub(crate) vocab: Vocabulary<N>,
    pub(crate) unk_token: SmallString,
    pub(crate) prefix: SmallString,
    pub(crate) max_chars: usize,
}

/// The default unknown token.
pub(crate) const UNK_TOKEN: &str = "[UNK]";
/// The default continuing subword prefix.
pub(crate) const PREFIX: &str = "##";
/// The default maximum number of characters per word.
pub(crate) const MAX_CHARS: usize = 200;

impl<N> WordpieceTokenizer<N> {
    /// Creates a word piece model with the default configuration.
    ///
    /// The defaults are the `"[UNK]"` unknown token, the `"##"` continuing subword prefix and
    /// `200` maximum characters per word.
    pub fn new(vocab: Vocabulary<N>) -> Self {
        Self::with_config(vocab, UNK_TOKEN, PREFIX, MAX_CHARS)
    }

    /// Creates a word piece model.
    pub fn with_config(
        vocab: Vocabulary<N>,
        unk: impl AsRef<str>,
        prefix: impl AsRef<str>,
        max_chars: usize,
    ) -> Self {
        Self {
            vocab,
            unk_token: unk.as_ref().into(),
            prefix: prefix.as_ref().into(),
            max_chars,
        }
    }

    /// Gets the vocabulary.
    pub fn vocab(&self) -> &Vocabulary<N> {
        &self.vocab
    }

    /// Splits a single token into subwords.
    ///
    /// An empty token yields no subwords.
    pub fn split(&self, token: &str) -> Vec<String> {
        let mut subwords = Vec::new();
        self.split_into(token, &mut subwords);
        subwords
    }

    /// Appends the subwords of the token.
    pub(crate) fn split_into(&self, token: &str, subwords: &mut Vec<String>) {
        if token.chars().count() > self.max_chars {
            subwords.push(self.unk_token.to_string());
            return;
        }

        let len = subwords.len();
        let mut start = 0;
        while start < token.len() {
            let mut end = token.len();
            let mut subword = None;
            while start < end {
                let substr = &token[start..end];
                let candidate = if start > 0 {
                    Cow::Owned(format!("{}{}", self.prefix, substr))
                } else {
                    Cow::Borrowed(substr)
                };
                if self.vocab.contains(candidate.as_ref()) {
                    subword = Some(candidate.into_owned());
                    break;
                }
                end -= substr.chars().next_back().map_or(1, char::len_utf8);
            }

            if let Some(subword) = subword {
                subwords.push(subword);
                start = end;
            } else {
                // partial decompositions are discarded
                subwords.truncate(len);
                subwords.push(self.unk_token.to_string());
                return;
            }
        }
    }
}

impl<N> Tokenize for WordpieceTokenizer<N> {
    fn tokenize_batch<I, S>(&self, sequences: I) -> Vec<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        sequences
            .into_iter()
            .map(|sequence| {
                let mut subwords = Vec::new();
                for token in whitespace_tokenize(sequence.as_ref()) {
                    self.split_into(token, &mut subwords);
                }
                subwords
            })
            .collect()
    }
}

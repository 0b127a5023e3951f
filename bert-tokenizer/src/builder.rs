use std::{io::BufRead, path::Path};

use displaydoc::Display;
use log::debug;
use num_traits::FromPrimitive;
use thiserror::Error;

use crate::{
    basic::BasicTokenizer,
    model::{WordpieceTokenizer, MAX_CHARS, PREFIX, UNK_TOKEN},
    normalizer::Normalizer,
    pre_tokenizer::PreTokenizer,
    tokenizer::FullTokenizer,
    vocab::{VocabError, Vocabulary},
    SmallString,
};

/// A builder to create a Bert [`FullTokenizer`].
pub struct Builder<N> {
    vocab: Vocabulary<N>,
    normalizer: Normalizer,
    unk: SmallString,
    prefix: SmallString,
    max_chars: usize,
}

/// The potential errors of the builder.
#[derive(Debug, Display, Error)]
pub enum BuilderError {
    /// Failed to load the vocabulary: {0}
    Vocab(#[from] VocabError),
}

impl<N> Builder<N> {
    /// Creates a [`FullTokenizer`] builder from a vocabulary file.
    ///
    /// The default settings are the same as for [`new()`].
    ///
    /// [`new()`]: Builder::new
    pub fn from_file(vocab: impl AsRef<Path>) -> Result<Self, BuilderError>
    where
        N: FromPrimitive,
    {
        Ok(Self::with_vocab(Vocabulary::from_file(vocab)?))
    }

    /// Creates a [`FullTokenizer`] builder from a vocabulary.
    ///
    /// The default settings are:
    /// - A normalizer which cleans the text and separates chinese characters, but neither
    /// lowercases nor strips accents.
    /// - A word piece model with `"[UNK]"` unknown token, `"##"` continuing subword prefix and
    /// `200` maximum characters per word.
    pub fn new(vocab: impl BufRead) -> Result<Self, BuilderError>
    where
        N: FromPrimitive,
    {
        Ok(Self::with_vocab(Vocabulary::parse(vocab)?))
    }

    fn with_vocab(vocab: Vocabulary<N>) -> Self {
        Self {
            vocab,
            normalizer: Normalizer::default(),
            unk: UNK_TOKEN.into(),
            prefix: PREFIX.into(),
            max_chars: MAX_CHARS,
        }
    }

    /// Toggles lowercasing and accent stripping together.
    ///
    /// Defaults to `false`.
    pub fn with_lowercase(mut self, toggle: bool) -> Self {
        self.normalizer = Normalizer::new(true, true, toggle, toggle);
        self
    }

    /// Configures the normalizer.
    pub fn with_normalizer(
        mut self,
        clean_text: bool,
        handle_chinese_chars: bool,
        strip_accents: bool,
        lowercase: bool,
    ) -> Self {
        self.normalizer =
            Normalizer::new(clean_text, handle_chinese_chars, strip_accents, lowercase);
        self
    }

    /// Configures the word piece model.
    pub fn with_model(
        mut self,
        unk: impl AsRef<str>,
        prefix: impl AsRef<str>,
        max_chars: usize,
    ) -> Self {
        self.unk = unk.as_ref().into();
        self.prefix = prefix.as_ref().into();
        self.max_chars = max_chars;
        self
    }

    /// Builds the tokenizer.
    pub fn build(self) -> FullTokenizer<N> {
        debug!(
            "building tokenizer with {:?}, unknown token {}, prefix {} and {} max chars",
            self.normalizer, self.unk, self.prefix, self.max_chars,
        );
        if !self.vocab.contains(self.unk.as_str()) {
            debug!("unknown token {} is missing from the vocabulary", self.unk);
        }

        FullTokenizer {
            basic: BasicTokenizer {
                normalizer: self.normalizer,
                pre_tokenizer: PreTokenizer,
            },
            wordpiece: WordpieceTokenizer {
                vocab: self.vocab,
                unk_token: self.unk,
                prefix: self.prefix,
                max_chars: self.max_chars,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::Tokenize;

    const VOCAB: &[u8] = b"[UNK]\n<unk>\nhello\n@@lo\nhel\n";

    #[test]
    fn test_defaults() {
        let tokenizer = Builder::<u32>::new(VOCAB).unwrap().build();
        assert_eq!(tokenizer.tokenize("hello Hello"), ["hello", "[UNK]"]);
        assert_eq!(tokenizer.unk_token(), "[UNK]");
    }

    #[test]
    fn test_with_lowercase() {
        let tokenizer = Builder::<u32>::new(VOCAB)
            .unwrap()
            .with_lowercase(true)
            .build();
        assert_eq!(tokenizer.tokenize("hello HÉLLO"), ["hello", "hello"]);
    }

    #[test]
    fn test_with_normalizer() {
        let tokenizer = Builder::<u32>::new(VOCAB)
            .unwrap()
            .with_normalizer(true, true, false, true)
            .build();
        assert_eq!(tokenizer.tokenize("HELLO héllo"), ["hello", "[UNK]"]);
    }

    #[test]
    fn test_with_model() {
        let tokenizer = Builder::<u32>::new(VOCAB)
            .unwrap()
            .with_model("<unk>", "@@", 4)
            .build();
        assert_eq!(tokenizer.tokenize("hello"), ["<unk>"]);

        let tokenizer = Builder::<u32>::new(VOCAB)
            .unwrap()
            .with_model("<unk>", "@@", 5)
            .build();
        assert_eq!(tokenizer.tokenize("hello hello"), ["hello", "hello"]);
        assert_eq!(tokenizer.unk_token(), "<unk>");
    }

    #[test]
    fn test_with_model_prefix() {
        let vocab = b"[UNK]\nhel\n@@lo\n" as &[u8];
        let tokenizer = Builder::<u32>::new(vocab)
            .unwrap()
            .with_model("[UNK]", "@@", 100)
            .build();
        assert_eq!(tokenizer.tokenize("hello"), ["hel", "@@lo"]);
    }

    #[test]
    fn test_from_file_missing() {
        assert!(matches!(
            Builder::<u32>::from_file("missing/vocab.txt"),
            Err(BuilderError::Vocab(VocabError::Io(_))),
        ));
    }
}

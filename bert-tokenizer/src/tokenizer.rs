use std::{io::BufRead, path::Path};

use displaydoc::Display;
use num_traits::FromPrimitive;
use thiserror::Error;

use crate::{
    basic::BasicTokenizer,
    builder::{Builder, BuilderError},
    model::WordpieceTokenizer,
    tokenize::Tokenize,
    vocab::Vocabulary,
};

/// A Bert tokenizer.
///
/// Can be created via the [`Builder`] and consists of a basic tokenizer followed by a word piece
/// model. The tokens can be converted into their ids in the vocabulary.
#[derive(Debug)]
pub struct FullTokenizer<N> {
    pub(crate) basic: BasicTokenizer,
    pub(crate) wordpiece: WordpieceTokenizer<N>,
}

/// The token `{0}` doesn't exist in the vocabulary
#[derive(Debug, Display, Error)]
pub struct LookupError(pub String);

impl<N> FullTokenizer<N> {
    /// Loads a tokenizer with the default configuration from a vocabulary.
    ///
    /// Lowercasing also strips accents.
    pub fn load(vocab: impl BufRead, lowercase: bool) -> Result<Self, BuilderError>
    where
        N: FromPrimitive,
    {
        Ok(Builder::new(vocab)?.with_lowercase(lowercase).build())
    }

    /// Loads a tokenizer with the default configuration from a vocabulary file.
    ///
    /// Lowercasing also strips accents.
    pub fn from_file(vocab: impl AsRef<Path>, lowercase: bool) -> Result<Self, BuilderError>
    where
        N: FromPrimitive,
    {
        Ok(Builder::from_file(vocab)?.with_lowercase(lowercase).build())
    }

    /// Gets the vocabulary.
    pub fn vocab(&self) -> &Vocabulary<N> {
        self.wordpiece.vocab()
    }

    /// Gets the unknown token.
    pub fn unk_token(&self) -> &str {
        self.wordpiece.unk_token.as_str()
    }

    /// Converts the tokens into their ids.
    ///
    /// # Errors
    /// Fails if a token doesn't exist in the vocabulary, which never happens for tokens of this
    /// tokenizer as long as the unknown token is part of the vocabulary.
    pub fn convert<I, S>(&self, tokens: I) -> Result<Vec<N>, LookupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        N: Copy,
    {
        tokens
            .into_iter()
            .map(|token| {
                let token = token.as_ref();
                self.vocab()
                    .get(token)
                    .ok_or_else(|| LookupError(token.to_string()))
            })
            .collect()
    }
}

impl<N> Tokenize for FullTokenizer<N> {
    fn tokenize_batch<I, S>(&self, sequences: I) -> Vec<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        sequences
            .into_iter()
            .map(|sequence| {
                let mut subwords = Vec::new();
                for token in self.basic.split(sequence.as_ref()) {
                    self.wordpiece.split_into(&token, &mut subwords);
                }
                subwords
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use test_utils::bert;

    use super::*;

    const VOCAB: &str = "[PAD]\n[UNK]\n[CLS]\n[SEP]\nthe\nun\n##want\n##ed\nrunn\n##ing\n,\n.\n!\nhello\nworld\n野\n口\ncafe\n";

    fn tokenizer(lowercase: bool) -> FullTokenizer<u32> {
        FullTokenizer::load(VOCAB.as_bytes(), lowercase).unwrap()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenizer(true).tokenize("UNwant\u{00E9}d,running"),
            ["un", "##want", "##ed", ",", "runn", "##ing"],
        );
        assert_eq!(
            tokenizer(true).tokenize("Hello  World!"),
            ["hello", "world", "!"],
        );
    }

    #[test]
    fn test_tokenize_cased() {
        assert_eq!(
            tokenizer(false).tokenize("Hello world. Café"),
            ["[UNK]", "world", ".", "[UNK]"],
        );
        assert_eq!(tokenizer(true).tokenize("Café"), ["cafe"]);
    }

    #[test]
    fn test_tokenize_chinese() {
        assert_eq!(tokenizer(false).tokenize("野口"), ["野", "口"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenizer(true).tokenize("").is_empty());
        assert!(tokenizer(true).tokenize(" \t\n").is_empty());
    }

    #[test]
    fn test_tokenize_batch_order() {
        assert_eq!(
            tokenizer(true).tokenize_batch(&["world", "hello", ""]),
            [vec!["world"], vec!["hello"], vec![]],
        );
    }

    #[test]
    fn test_convert() {
        let tokenizer = tokenizer(true);
        assert_eq!(
            tokenizer.convert(&["[CLS]", "hello", "##ing", "[SEP]"]).unwrap(),
            [2, 13, 9, 3],
        );
        assert!(tokenizer.convert(Vec::<String>::new()).unwrap().is_empty());
    }

    #[test]
    fn test_convert_missing() {
        let error = tokenizer(true).convert(&["hello", "missing"]).unwrap_err();
        assert_eq!(error.0, "missing");
    }

    #[test]
    fn test_convert_tokenized() {
        let tokenizer = tokenizer(true);
        let tokens = tokenizer.tokenize("Some unknown, UNWANTED words ☃ 野口 !!");
        assert_eq!(
            tokenizer.convert(&tokens).unwrap(),
            [1, 1, 10, 5, 6, 7, 1, 1, 15, 16, 12, 12],
        );
    }

    #[test]
    fn test_convert_never_fails() {
        let tokenizer = tokenizer(false);
        let sequences = vec![
            String::new(),
            " \u{3000} ".into(),
            "ÄÖÜ äöü Ωmega".into(),
            "a\u{0}b\u{fffd}c".into(),
            "x".repeat(500),
            "野口里佳 ☃☃ !?".into(),
        ];
        for tokens in tokenizer.tokenize_batch(&sequences) {
            assert!(tokenizer.convert(&tokens).is_ok());
        }
    }

    #[test]
    fn test_convert_without_unk_token() {
        let tokenizer = FullTokenizer::<u32>::load("hello".as_bytes(), true).unwrap();
        let tokens = tokenizer.tokenize("hello world");
        assert_eq!(tokens, ["hello", "[UNK]"]);
        assert_eq!(tokenizer.convert(&tokens).unwrap_err().0, "[UNK]");
    }

    #[test]
    fn test_from_file() {
        let tokenizer = FullTokenizer::<i32>::from_file(bert::vocab().unwrap(), true).unwrap();
        assert_eq!(tokenizer.vocab().len(), 29);
        let tokens = tokenizer.tokenize("The quick brown fox jumps over the lazy dog!");
        assert_eq!(
            tokens,
            ["the", "quick", "brown", "fox", "jump", "##s", "over", "the", "lazy", "dog", "!"],
        );
        assert_eq!(
            tokenizer.convert(&tokens).unwrap(),
            [5, 6, 7, 8, 9, 10, 12, 5, 13, 14, 17],
        );
    }

    #[test]
    fn test_from_file_missing() {
        assert!(matches!(
            FullTokenizer::<i32>::from_file("missing/vocab.txt", true),
            Err(BuilderError::Vocab(_)),
        ));
    }
}

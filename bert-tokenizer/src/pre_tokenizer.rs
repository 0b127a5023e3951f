use unicode_categories::UnicodeCategories;

use crate::tokenize::whitespace_tokenize;

/// A Bert pre-tokenizer.
///
/// Splits on whitespace and isolates punctuation.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PreTokenizer;

fn is_bert_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_punctuation()
}

impl PreTokenizer {
    /// Pre-tokenizes the normalized sequence.
    pub(crate) fn pre_tokenize(&self, sequence: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for word in whitespace_tokenize(sequence) {
            let mut start = 0;
            for (idx, c) in word.char_indices() {
                if is_bert_punctuation(c) {
                    if start < idx {
                        tokens.push(word[start..idx].to_string());
                    }
                    start = idx + c.len_utf8();
                    tokens.push(word[idx..start].to_string());
                }
            }
            if start < word.len() {
                tokens.push(word[start..].to_string());
            }
        }

        tokens
    }
}

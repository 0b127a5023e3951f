use unicode_categories::UnicodeCategories;
use unicode_normalization_alignments::UnicodeNormalization;

/// A Bert normalizer.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Normalizer {
    clean_text: bool,
    handle_chinese_chars: bool,
    strip_accents: bool,
    lowercase: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(true, true, false, false)
    }
}

impl Normalizer {
    pub(crate) fn new(
        clean_text: bool,
        handle_chinese_chars: bool,
        strip_accents: bool,
        lowercase: bool,
    ) -> Self {
        Self {
            clean_text,
            handle_chinese_chars,
            strip_accents,
            lowercase,
        }
    }

    fn clean_text(&self, sequence: String) -> String {
        if self.clean_text {
            sequence
                .chars()
                .filter(|&c| {
                    c != '\0'
                        && c != '\u{fffd}'
                        && (c == '\t' || c == '\n' || c == '\r' || !c.is_other())
                })
                .map(|c| {
                    // These are technically control characters but we count them as whitespace
                    if c == '\t' || c == '\n' || c == '\r' || c.is_whitespace() {
                        ' '
                    } else {
                        c
                    }
                })
                .collect()
        } else {
            sequence
        }
    }

    fn handle_chinese_chars(&self, sequence: String) -> String {
        if self.handle_chinese_chars {
            let mut chars = String::with_capacity(sequence.len());
            for c in sequence.chars() {
                // A "chinese character" is anything in the CJK Unicode block, which doesn't cover
                // Hangul, Hiragana or Katakana. Those are written with whitespace separated words
                // and are handled like any other language.
                if let '\u{4E00}'..='\u{9FFF}'
                | '\u{3400}'..='\u{4DBF}'
                | '\u{20000}'..='\u{2A6DF}'
                | '\u{2A700}'..='\u{2B73F}'
                | '\u{2B740}'..='\u{2B81F}'
                | '\u{2B820}'..='\u{2CEAF}'
                | '\u{F900}'..='\u{FAFF}'
                | '\u{2F800}'..='\u{2FA1F}' = c
                {
                    chars.push(' ');
                    chars.push(c);
                    chars.push(' ');
                } else {
                    chars.push(c);
                }
            }
            chars
        } else {
            sequence
        }
    }

    fn lowercase(&self, sequence: String) -> String {
        if self.lowercase {
            sequence.to_lowercase()
        } else {
            sequence
        }
    }

    fn strip_accents(&self, sequence: String) -> String {
        if self.strip_accents {
            sequence
                .as_str()
                .nfd()
                .map(|(c, _)| c)
                .filter(|c| !c.is_mark_nonspacing())
                .collect()
        } else {
            sequence
        }
    }

    /// Normalizes the sequence.
    pub(crate) fn normalize(&self, sequence: impl Into<String>) -> String {
        let sequence = self.clean_text(sequence.into());
        let sequence = self.handle_chinese_chars(sequence);
        let sequence = self.lowercase(sequence);
        self.strip_accents(sequence)
    }
}

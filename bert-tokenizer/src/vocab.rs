use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, Error as IoError},
    path::Path,
};

use displaydoc::Display;
use log::debug;
use num_traits::FromPrimitive;
use thiserror::Error;

/// A Bert word piece vocabulary.
///
/// Each token is mapped to the index of the line it was read from. Every line allocates an id,
/// so if a token occurs on several lines only the id of its last occurrence can be looked up.
#[derive(Debug)]
pub struct Vocabulary<N> {
    ids: HashMap<String, N>,
    len: usize,
}

/// The potential errors of the vocabulary.
#[derive(Debug, Display, Error)]
pub enum VocabError {
    /// Failed to read the vocabulary: {0}
    Io(#[from] IoError),
    /// The id of vocabulary line {0} is out of range for the id type
    Id(usize),
}

impl<N> Vocabulary<N> {
    /// Reads the vocabulary from a file.
    pub fn from_file(vocab: impl AsRef<Path>) -> Result<Self, VocabError>
    where
        N: FromPrimitive,
    {
        Self::parse(BufReader::new(File::open(vocab)?))
    }

    /// Parses the vocabulary with one token per line.
    ///
    /// Trailing whitespace is trimmed and the ids are assigned in line order starting at zero.
    pub fn parse(vocab: impl BufRead) -> Result<Self, VocabError>
    where
        N: FromPrimitive,
    {
        let mut ids = HashMap::new();
        let mut len = 0;
        for line in vocab.lines() {
            let mut token = line?;
            token.truncate(token.trim_end().len());
            let id = N::from_usize(len).ok_or(VocabError::Id(len))?;
            if ids.insert(token, id).is_some() {
                // the earlier id stays allocated but becomes unreachable
                debug!("vocabulary line {} shadows an earlier line", len);
            }
            len += 1;
        }
        debug!(
            "parsed vocabulary with {} ids for {} distinct tokens",
            len,
            ids.len(),
        );

        Ok(Self { ids, len })
    }

    /// Gets the id of the token.
    pub fn get(&self, token: &str) -> Option<N>
    where
        N: Copy,
    {
        self.ids.get(token).copied()
    }

    /// Checks whether the token is part of the vocabulary.
    pub fn contains(&self, token: &str) -> bool {
        self.ids.contains_key(token)
    }

    /// Gets the number of allocated ids, including shadowed ones.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

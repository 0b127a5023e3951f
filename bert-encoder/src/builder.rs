use std::{
    fs::File,
    io::{BufRead, BufReader, Error as IoError},
    path::Path,
};

use bert_tokenizer::{BuilderError as TokenizerError, FullTokenizer};
use displaydoc::Display;
use log::debug;
use serde_json::Error as JsonError;
use thiserror::Error;

use crate::{
    details::ModelDetails,
    encoder::{Encoder, EncoderError},
};

/// A builder to create an [`Encoder`].
pub struct Builder<V> {
    vocab: V,
    details: ModelDetails,
}

/// Potential errors of the [`Encoder`] [`Builder`].
#[derive(Debug, Display, Error)]
pub enum BuilderError {
    /// Failed to load a data file: {0}
    DataFile(#[from] IoError),
    /// Failed to parse the model details: {0}
    Details(#[from] JsonError),
    /// Failed to build the tokenizer: {0}
    Tokenizer(#[from] TokenizerError),
    /// Failed to build the encoder: {0}
    Encoder(#[from] EncoderError),
}

impl Builder<BufReader<File>> {
    /// The directory of the model assets.
    pub const ASSETS_DIR: &'static str = "assets";

    /// The file of the model details within the assets.
    pub const DETAILS_FILE: &'static str = "model.json";

    /// The file of the vocabulary within the assets.
    pub const VOCAB_FILE: &'static str = "vocab.txt";

    /// Creates an [`Encoder`] builder from a saved model directory.
    ///
    /// The model details and the vocabulary are read from its assets.
    pub fn from_dir(model: impl AsRef<Path>) -> Result<Self, BuilderError> {
        let assets = model.as_ref().join(Self::ASSETS_DIR);
        let details = ModelDetails::from_file(assets.join(Self::DETAILS_FILE))?;
        let vocab = BufReader::new(File::open(assets.join(Self::VOCAB_FILE))?);
        debug!("loaded model details from {}", assets.display());

        Ok(Self::new(vocab, details))
    }
}

impl<V> Builder<V>
where
    V: BufRead,
{
    /// Creates an [`Encoder`] builder from a vocabulary and model details.
    pub fn new(vocab: V, details: ModelDetails) -> Self {
        Self { vocab, details }
    }

    /// Gets the model details.
    pub fn details(&self) -> &ModelDetails {
        &self.details
    }

    /// Sets the maximum sequence length, overriding the one of the model details.
    ///
    /// # Errors
    /// Fails if `len` is less than two.
    pub fn with_max_sequence_length(mut self, len: usize) -> Result<Self, BuilderError> {
        if len < Encoder::ADDED_TOKENS {
            Err(EncoderError::SequenceLength.into())
        } else {
            self.details.max_sequence_length = len;
            Ok(self)
        }
    }

    /// Builds an [`Encoder`].
    ///
    /// # Errors
    /// Fails on an unreadable vocabulary or invalid encoder settings.
    pub fn build(self) -> Result<Encoder, BuilderError> {
        let tokenizer = FullTokenizer::load(self.vocab, self.details.do_lower_case)?;
        let encoder = Encoder::new(tokenizer, self.details.max_sequence_length)?;
        debug!(
            "built encoder with lowercasing {} and maximum sequence length {}",
            self.details.do_lower_case, self.details.max_sequence_length,
        );

        Ok(encoder)
    }
}

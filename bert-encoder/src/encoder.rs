use std::iter::once;

use bert_tokenizer::{FullTokenizer, LookupError, Tokenize};
use derive_more::{Deref, From};
use displaydoc::Display;
use thiserror::Error;

use crate::ndarray::{s, Array2};

/// An encoder of sequences into the inputs of a Bert model.
///
/// Each sequence is encoded as a row of fixed length, which starts with the class token, followed
/// by as many token ids as fit and the separation token, and is padded with zeros.
#[derive(Debug)]
pub struct Encoder {
    tokenizer: FullTokenizer<i32>,
    cls_id: i32,
    sep_id: i32,
    max_len: usize,
}

/// The potential errors of the encoder.
#[derive(Debug, Display, Error)]
pub enum EncoderError {
    /// The maximum sequence length must be at least two to allow for the special tokens
    SequenceLength,
    /// Failed to convert the tokens: {0}
    Lookup(#[from] LookupError),
}

/// The token ids of the encoded sequences.
#[derive(Clone, Debug, Deref, From)]
pub struct InputIds(pub Array2<i32>);

/// The attention masks of the encoded sequences.
#[derive(Clone, Debug, Deref, From)]
pub struct InputMask(pub Array2<i32>);

/// The segment ids of the encoded sequences.
#[derive(Clone, Debug, Deref, From)]
pub struct SegmentIds(pub Array2<i32>);

/// The encoded sequences.
///
/// All arrays are of shape `(sequences, max_sequence_length)`.
#[derive(Clone, Debug)]
pub struct Inputs {
    pub input_ids: InputIds,
    pub input_mask: InputMask,
    pub segment_ids: SegmentIds,
}

impl Encoder {
    /// The class token which starts every sequence.
    pub const CLS_TOKEN: &'static str = "[CLS]";

    /// The separation token which ends every sequence.
    pub const SEP_TOKEN: &'static str = "[SEP]";

    /// Number of special tokens added to every sequence.
    pub(crate) const ADDED_TOKENS: usize = 2;

    /// Creates an encoder.
    ///
    /// # Errors
    /// Fails if the maximum sequence length is less than two or if the special tokens don't exist
    /// in the vocabulary.
    pub fn new(tokenizer: FullTokenizer<i32>, max_len: usize) -> Result<Self, EncoderError> {
        if max_len < Self::ADDED_TOKENS {
            return Err(EncoderError::SequenceLength);
        }
        let ids = tokenizer.convert(&[Self::CLS_TOKEN, Self::SEP_TOKEN])?;

        Ok(Self {
            tokenizer,
            cls_id: ids[0],
            sep_id: ids[1],
            max_len,
        })
    }

    /// Gets the tokenizer.
    pub fn tokenizer(&self) -> &FullTokenizer<i32> {
        &self.tokenizer
    }

    /// Gets the number of tokens per encoded sequence.
    pub fn max_sequence_length(&self) -> usize {
        self.max_len
    }

    /// Encodes the batch of sequences.
    ///
    /// Token ids which don't fit into a row are dropped. The rows are in the same order as the
    /// sequences.
    pub fn encode<I, S>(&self, sequences: I) -> Result<Inputs, EncoderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = self
            .tokenizer
            .tokenize_batch(sequences)
            .iter()
            .map(|tokens| self.tokenizer.convert(tokens))
            .collect::<Result<Vec<_>, _>>()?;

        let shape = (ids.len(), self.max_len);
        let mut input_ids = Array2::<i32>::zeros(shape);
        let mut input_mask = Array2::<i32>::zeros(shape);
        let segment_ids = Array2::<i32>::zeros(shape);
        for (i, ids) in ids.iter().enumerate() {
            let len = ids.len().min(self.max_len - Self::ADDED_TOKENS);
            let mut row = input_ids.row_mut(i);
            row[0] = self.cls_id;
            for (j, id) in ids.iter().take(len).enumerate() {
                row[j + 1] = *id;
            }
            row[len + 1] = self.sep_id;
            input_mask
                .slice_mut(s![i, ..len + Self::ADDED_TOKENS])
                .mapv_inplace(|_| 1);
        }

        Ok(Inputs {
            input_ids: input_ids.into(),
            input_mask: input_mask.into(),
            segment_ids: segment_ids.into(),
        })
    }

    /// Encodes a single sequence.
    ///
    /// The inputs consist of a single row.
    pub fn encode_sequence(&self, sequence: impl AsRef<str>) -> Result<Inputs, EncoderError> {
        self.encode(once(sequence))
    }
}

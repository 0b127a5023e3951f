#![cfg_attr(doc, forbid(broken_intra_doc_links, private_intra_doc_links))]
//! The Bert encoder converts sequences into the inputs of a Bert model.
//!
//! Sequences are anything string-like and can also be single words or snippets. They are
//! tokenized into word pieces and encoded as fixed-length rows of token ids, attention masks and
//! segment ids, which can be fed to an inference engine running the model.
//!
//! ```no_run
//! use bert_encoder::Builder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let encoder = Builder::from_dir("bert-model")?
//!         .with_max_sequence_length(64)?
//!         .build()?;
//!
//!     let inputs = encoder.encode(&["This is a sequence.", "And another one!"])?;
//!     assert_eq!(inputs.input_ids.shape(), [2, 64]);
//!
//!     Ok(())
//! }
//! ```

mod builder;
mod details;
mod encoder;

pub use bert_tokenizer::{FullTokenizer, LookupError, Tokenize};
pub use ndarray;

pub use crate::{
    builder::{Builder, BuilderError},
    details::ModelDetails,
    encoder::{Encoder, EncoderError, InputIds, InputMask, Inputs, SegmentIds},
};

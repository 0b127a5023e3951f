#![cfg_attr(doc, forbid(broken_intra_doc_links, private_intra_doc_links))]
//! A Bert tokenizer which converts sequences into word piece tokens and their ids.
//!
//! The tokenization reproduces the reference Bert tokenization exactly, so that the ids are
//! consistent with the vocabulary of a pretrained model. It consists of a basic tokenizer and a
//! word piece model. The ids can be of any numerical data type which implements
//! [`FromPrimitive`]` + `[`Copy`].
//!
//! The basic tokenizer is configurable by:
//! - Cleans any control characters and replaces all sorts of whitespace by ` `.
//! - Separates Chinese characters by whitespace so they get split.
//! - Strips accents of characters.
//! - Lowercases characters.
//!
//! The punctuation and whitespace splitting is not configurable.
//!
//! The word piece model is configurable by:
//! - The unknown token.
//! - The continuing subword prefix.
//! - The maximum number of characters per word.
//!
//! ```no_run
//! use bert_tokenizer::{Builder, FullTokenizer, Tokenize};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tokenizer = Builder::<i32>::from_file("vocab.txt")?
//!         .with_lowercase(true)
//!         .with_model("[UNK]", "##", 200)
//!         .build();
//!
//!     let tokens = tokenizer.tokenize("This is a sequence.");
//!     let ids = tokenizer.convert(&tokens)?;
//!     let tokens = tokenizer.tokenize_batch(&["This is a sequence.", "And another one!"]);
//!
//!     let tokenizer = FullTokenizer::<i32>::from_file("vocab.txt", true)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! [`FromPrimitive`]: num_traits::FromPrimitive

mod basic;
mod builder;
mod model;
mod normalizer;
mod pre_tokenizer;
mod tokenize;
mod tokenizer;
mod vocab;

pub use crate::{
    basic::BasicTokenizer,
    builder::{Builder, BuilderError},
    model::WordpieceTokenizer,
    tokenize::{whitespace_tokenize, Tokenize},
    tokenizer::{FullTokenizer, LookupError},
    vocab::{VocabError, Vocabulary},
};

/// A stack allocated string with a maximum length of eight bytes.
type SmallString = smallstr::SmallString<[u8; 8]>;

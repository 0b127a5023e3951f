use std::{io::Result, path::PathBuf};

use crate::asset::{resolve_path, DATA_DIR};

/// Resolves the path to the Bert model directory.
pub fn model() -> Result<PathBuf> {
    resolve_path(&[DATA_DIR, "bert"])
}

/// Resolves the path to the Bert vocabulary.
pub fn vocab() -> Result<PathBuf> {
    resolve_path(&[DATA_DIR, "bert", "assets", "vocab.txt"])
}

/// Resolves the path to the Bert model details.
pub fn details() -> Result<PathBuf> {
    resolve_path(&[DATA_DIR, "bert", "assets", "model.json"])
}

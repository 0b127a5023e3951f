//! The single source of truth for all test data paths.

mod asset;
pub mod bert;

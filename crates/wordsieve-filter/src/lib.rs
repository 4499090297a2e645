//! wordsieve-filter
//!
//! Builds the removal set from block-list files and strips its members from
//! lemmatized documents.

pub mod removal_set;
pub mod remover;

pub use removal_set::{build_removal_set, RemovalSet};
pub use remover::{build_remover, collapse_whitespace, AlternationRemover, TokenRemover};

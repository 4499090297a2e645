//! wordsieve-vocab
//!
//! Turns filtered text into ordered, deduplicated word lists and writes them
//! out in fixed-size chunk files.

pub mod chunk;
pub mod extract;

pub use chunk::{chunk, write_chunks, Chunk};
pub use extract::{dedupe, VocabularyExtractor};

//! wordsieve-pipeline
//!
//! The two batch stages and the handoff between them. `run_normalize`
//! lemmatizes and filters a directory of documents and returns a
//! [`Completion`]; `run_vocabulary_extract` consumes one and writes chunked
//! vocabulary lists. When the stages run as separate processes the
//! completion travels through a marker file instead (see [`marker`]).

pub mod marker;
pub mod normalize;
pub mod pool;
pub mod vocabulary;

pub use marker::{claim_marker, write_marker};
pub use normalize::{run_normalize, LEMMATIZED_SUBDIR};
pub use pool::WorkerPool;
pub use vocabulary::run_vocabulary_extract;

pub use wordsieve_core::types::{Completion, VocabularyReport};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

use wordsieve_core::config::VocabularySettings;
use wordsieve_core::data_processor::DataProcessor;
use wordsieve_core::types::{Completion, FileVocabulary, VocabularyReport};
use wordsieve_vocab::{chunk, dedupe, write_chunks, VocabularyExtractor};

/// Stage 2: write the deduplicated vocabulary of every filtered document as
/// chunk files under `output_dir`, then drain the filtered directory.
///
/// Files run one after another. A file that cannot be read or written is
/// logged and reported with zero counts and its error. Once all files are done every `.txt`
/// in the filtered directory is deleted, and the directory itself goes too
/// if nothing else is left in it.
pub fn run_vocabulary_extract(
    completion: &Completion,
    output_dir: &Path,
    settings: &VocabularySettings,
) -> Result<VocabularyReport> {
    let processor = DataProcessor::new();
    let extractor = VocabularyExtractor::new(settings.min_word_len)?;
    let sources = processor.list_txt_files(&completion.filtered_dir);
    fs::create_dir_all(output_dir).with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let mut report = VocabularyReport { output_dir: output_dir.to_path_buf(), files: Vec::with_capacity(sources.len()) };
    for source in &sources {
        match extract_file(&processor, &extractor, source, output_dir, settings.chunk_size) {
            Ok(file) => {
                info!(file = %file.name, raw = file.raw_count, unique = file.unique_count, chunks = file.chunk_files, "vocabulary written");
                report.files.push(file);
            }
            Err(e) => {
                let message = format!("{e:#}");
                error!(file = %source.display(), error = %message, "vocabulary extraction failed");
                let name = source.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
                report.files.push(FileVocabulary::failed(name, message));
            }
        }
    }

    for source in &sources {
        if let Err(e) = fs::remove_file(source) {
            warn!(file = %source.display(), error = %e, "could not delete filtered file");
        }
    }
    if processor.remove_dir_if_empty(&completion.filtered_dir)? {
        info!(dir = %completion.filtered_dir.display(), "filtered directory drained and removed");
    }
    Ok(report)
}

fn extract_file(
    processor: &DataProcessor,
    extractor: &VocabularyExtractor,
    source: &Path,
    output_dir: &Path,
    chunk_size: usize,
) -> Result<FileVocabulary> {
    let doc = processor.read_document(source)?;
    let words = extractor.extract(&doc.text);
    let raw_count = words.len();
    let unique = dedupe(words);
    let written = write_chunks(doc.base_name(), &chunk(&unique, chunk_size)?, output_dir)?;
    Ok(FileVocabulary {
        name: doc.name.clone(),
        raw_count,
        unique_count: unique.len(),
        chunk_files: written.len(),
        error: None,
    })
}

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use wordsieve_core::config::NormalizeSettings;
use wordsieve_core::data_processor::DataProcessor;
use wordsieve_core::traits::{Lemmatize, WordRemover};
use wordsieve_core::types::{Completion, FileOutcome};
use wordsieve_filter::{build_removal_set, build_remover};
use wordsieve_lemma::get_default_lemmatizer;

use crate::pool::WorkerPool;

/// Directory under the filtered output that holds lemmatized, unfiltered text.
pub const LEMMATIZED_SUBDIR: &str = "lemmatized";

/// Stage 1: lemmatize every `.txt` in `input_dir`, then strip the words listed
/// in `blocklist_dir` and write the results to `filtered_dir`.
///
/// Both phases run on a pool of `settings.workers` threads and the second
/// starts only after the first has finished every file. A file that fails is
/// recorded as [`FileOutcome::Failed`] and the run carries on; a file left
/// empty by removal is recorded as [`FileOutcome::SkippedEmpty`] and not
/// written.
pub fn run_normalize(
    input_dir: &Path,
    blocklist_dir: &Path,
    filtered_dir: &Path,
    settings: &NormalizeSettings,
) -> Result<Completion> {
    let processor = DataProcessor::new();
    let inputs = processor.list_txt_files(input_dir);
    if inputs.is_empty() {
        warn!(dir = %input_dir.display(), "no input .txt files found");
    }
    let lemmatized_dir = filtered_dir.join(LEMMATIZED_SUBDIR);
    fs::create_dir_all(&lemmatized_dir).with_context(|| format!("Failed to create {}", lemmatized_dir.display()))?;

    let pool = WorkerPool::new(settings.workers)?;
    info!(files = inputs.len(), workers = pool.workers(), "lemmatizing");
    let lemmatizer = get_default_lemmatizer();
    let lemmatized = pool.run("lemmatize", &inputs, |source| {
        lemmatize_file(&processor, lemmatizer.as_ref(), source, &lemmatized_dir)
            .map(|intermediate| (source.clone(), intermediate))
            .map_err(|e| failed(source, e))
    })?;

    let removal_set = build_removal_set(blocklist_dir);
    let remover = build_remover(settings.match_mode, &removal_set)?;
    let pending: Vec<(PathBuf, PathBuf)> = lemmatized.iter().filter_map(|r| r.as_ref().ok().cloned()).collect();
    info!(files = pending.len(), mode = ?settings.match_mode, "removing block-listed words");
    let filtered = pool.run("remove", &pending, |(source, intermediate)| {
        filter_file(&processor, remover.as_ref(), source, intermediate, filtered_dir)
            .unwrap_or_else(|e| failed(source, e))
    })?;

    if let Err(e) = fs::remove_dir_all(&lemmatized_dir) {
        warn!(dir = %lemmatized_dir.display(), error = %e, "could not remove intermediate directory");
    }

    let mut filtered = filtered.into_iter();
    let outcomes: Vec<FileOutcome> = lemmatized
        .into_iter()
        .filter_map(|r| match r {
            Ok(_) => filtered.next(),
            Err(outcome) => Some(outcome),
        })
        .collect();
    let completion = Completion { filtered_dir: filtered_dir.to_path_buf(), removal_set_size: removal_set.len(), outcomes };
    info!(
        written = completion.written(),
        skipped = completion.skipped(),
        failed = completion.failed(),
        "normalize finished"
    );
    Ok(completion)
}

/// Lemmatizes `source` line by line into `out_dir`, returning the written path.
fn lemmatize_file(processor: &DataProcessor, lemmatizer: &dyn Lemmatize, source: &Path, out_dir: &Path) -> Result<PathBuf> {
    let doc = processor.read_document(source)?;
    let text = doc.text.lines().map(|line| lemmatizer.lemmatize_line(line)).collect::<Vec<_>>().join("\n");
    let target = out_dir.join(&doc.name);
    processor.write_text(&target, &text)?;
    Ok(target)
}

fn filter_file(
    processor: &DataProcessor,
    remover: &dyn WordRemover,
    source: &Path,
    intermediate: &Path,
    filtered_dir: &Path,
) -> Result<FileOutcome> {
    let doc = processor.read_document(intermediate)?;
    let text = remover.remove_words(&doc.text);
    if text.is_empty() {
        info!(file = %source.display(), "nothing left after removal, skipping");
        return Ok(FileOutcome::SkippedEmpty { path: source.to_path_buf() });
    }
    let target = filtered_dir.join(&doc.name);
    processor.write_text(&target, &text)?;
    Ok(FileOutcome::Written { path: target })
}

fn failed(source: &Path, e: impl Into<anyhow::Error>) -> FileOutcome {
    let e = e.into();
    error!(file = %source.display(), error = %e, "file failed");
    FileOutcome::Failed { path: source.to_path_buf(), error: format!("{e:#}") }
}

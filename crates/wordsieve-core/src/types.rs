//! Domain types shared by both stages.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Suffix inserted between a document's base name and the chunk index.
pub const CHUNK_FILE_INFIX: &str = "_lowercase_unique_words_part";

/// A text file loaded whole into memory.
///
/// - `name`: file name including extension (`a.txt`)
/// - `path`: where it was read from
/// - `text`: content, with invalid UTF-8 replaced
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub path: PathBuf,
    pub text: String,
}

impl Document {
    /// File name without its extension, used to name derived artifacts.
    pub fn base_name(&self) -> &str {
        Path::new(&self.name).file_stem().and_then(|s| s.to_str()).unwrap_or(&self.name)
    }
}

/// Coarse word class used only to pick lemmatization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Pos {
    /// Maps a Penn Treebank tag by its first letter. Unknown tags are nouns.
    pub fn from_treebank(tag: &str) -> Self {
        match tag.as_bytes().first() {
            Some(b'J') => Pos::Adjective,
            Some(b'V') => Pos::Verb,
            Some(b'R') => Pos::Adverb,
            _ => Pos::Noun,
        }
    }
}

/// How the remover decides that a word in the text is a removal-set member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Hash-set lookup over maximal `[A-Za-z'-]` runs.
    #[default]
    Token,
    /// One case-insensitive `\b(?:w1|w2|..)\b` regex over the whole text.
    Alternation,
}

/// What stage 1 did with a single input file.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Written { path: PathBuf },
    SkippedEmpty { path: PathBuf },
    Failed { path: PathBuf, error: String },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Written { path } | FileOutcome::SkippedEmpty { path } | FileOutcome::Failed { path, .. } => path,
        }
    }
}

/// Handoff value produced by stage 1 and consumed by stage 2.
///
/// When both stages run in one process this is passed directly; across
/// processes it is reconstructed from the completion marker.
#[derive(Debug, Clone, Serialize)]
pub struct Completion {
    pub filtered_dir: PathBuf,
    pub removal_set_size: usize,
    pub outcomes: Vec<FileOutcome>,
}

impl Completion {
    /// A completion known only by its output directory.
    pub fn from_directory(filtered_dir: impl Into<PathBuf>) -> Self {
        Self { filtered_dir: filtered_dir.into(), removal_set_size: 0, outcomes: Vec::new() }
    }

    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, FileOutcome::Written { .. })).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, FileOutcome::SkippedEmpty { .. })).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, FileOutcome::Failed { .. })).count()
    }
}

/// Vocabulary statistics for one filtered document.
///
/// A document that could not be processed keeps zero counts and carries the
/// reason in `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileVocabulary {
    pub name: String,
    pub raw_count: usize,
    pub unique_count: usize,
    pub chunk_files: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileVocabulary {
    pub fn failed(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self { name: name.into(), error: Some(error.into()), ..Self::default() }
    }
}

/// Stage 2 summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyReport {
    pub output_dir: PathBuf,
    pub files: Vec<FileVocabulary>,
}

impl VocabularyReport {
    pub fn total_raw(&self) -> usize { self.files.iter().map(|f| f.raw_count).sum() }
    pub fn total_unique(&self) -> usize { self.files.iter().map(|f| f.unique_count).sum() }
    pub fn total_chunk_files(&self) -> usize { self.files.iter().map(|f| f.chunk_files).sum() }
    pub fn failed(&self) -> usize { self.files.iter().filter(|f| f.error.is_some()).count() }
}

/// Output file name for the `index`-th (1-based) chunk of `base_name`.
pub fn chunk_file_name(base_name: &str, index: usize) -> String {
    format!("{base_name}{CHUNK_FILE_INFIX}{index}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn treebank_prefixes_map_to_word_classes() {
        assert_eq!(Pos::from_treebank("JJR"), Pos::Adjective);
        assert_eq!(Pos::from_treebank("VBG"), Pos::Verb);
        assert_eq!(Pos::from_treebank("NNS"), Pos::Noun);
        assert_eq!(Pos::from_treebank("RB"), Pos::Adverb);
        assert_eq!(Pos::from_treebank("DT"), Pos::Noun);
        assert_eq!(Pos::from_treebank(""), Pos::Noun);
    }

    #[test]
    fn chunk_names_are_one_based_and_keep_the_stem() {
        let doc = Document { name: "a.txt".into(), path: PathBuf::from("x/a.txt"), text: String::new() };
        assert_eq!(chunk_file_name(doc.base_name(), 1), "a_lowercase_unique_words_part1.txt");
    }
}

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use wordsieve_core::data_processor::DataProcessor;
use wordsieve_lemma::{is_word, tokenize};

/// Lowercase words to strip from documents. Built once, then only read.
pub type RemovalSet = HashSet<String>;

/// Unions the word tokens of every `.txt` file in `blocklist_dir`.
///
/// A missing directory gives an empty set. Unreadable files are logged and
/// skipped.
pub fn build_removal_set(blocklist_dir: &Path) -> RemovalSet {
    let mut set = RemovalSet::new();
    if !blocklist_dir.is_dir() {
        warn!(dir = %blocklist_dir.display(), "block-list directory not found, nothing will be removed");
        return set;
    }
    let processor = DataProcessor::new();
    for path in processor.list_txt_files(blocklist_dir) {
        match processor.read_document(&path) {
            Ok(doc) => {
                for line in doc.text.lines() {
                    set.extend(tokenize(line).into_iter().filter(|t| is_word(t)).map(|t| t.to_lowercase()));
                }
            }
            Err(e) => warn!(file = %path.display(), error = %e, "skipping unreadable block-list file"),
        }
    }
    info!(words = set.len(), "removal set built");
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn unions_word_tokens_of_all_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "The\nand, OR 42\n").unwrap();
        fs::write(tmp.path().join("b.txt"), "the well-known\n").unwrap();
        fs::write(tmp.path().join("skip.md"), "ignored").unwrap();

        let set = build_removal_set(tmp.path());
        let mut words: Vec<_> = set.into_iter().collect();
        words.sort();
        assert_eq!(words, vec!["and", "or", "the", "well-known"]);
    }

    #[test]
    fn missing_directory_is_an_empty_set() {
        let tmp = TempDir::new().unwrap();
        assert!(build_removal_set(&tmp.path().join("nope")).is_empty());
    }
}

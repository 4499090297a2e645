use anyhow::{ensure, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use wordsieve_core::types::chunk_file_name;

/// A contiguous slice of a vocabulary list. `index` starts at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub index: usize,
    pub words: &'a [String],
}

/// Splits `words` into the fewest slices of at most `size` words, in order.
/// An empty list has no chunks. A zero `size` is rejected.
pub fn chunk(words: &[String], size: usize) -> Result<Vec<Chunk<'_>>> {
    ensure!(size > 0, "chunk size must be at least 1");
    Ok(words
        .chunks(size)
        .enumerate()
        .map(|(i, words)| Chunk { index: i + 1, words })
        .collect())
}

/// Writes each chunk to `<out_dir>/<base>_lowercase_unique_words_part<N>.txt`,
/// one word per line with a trailing newline. Returns the paths written.
pub fn write_chunks(base_name: &str, chunks: &[Chunk<'_>], out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let mut written = Vec::with_capacity(chunks.len());
    for c in chunks {
        let path = out_dir.join(chunk_file_name(base_name, c.index));
        let mut body = c.words.join("\n");
        body.push('\n');
        fs::write(&path, body).with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("w{i}")).collect()
    }

    #[test]
    fn chunk_count_is_ceiling_and_sizes_are_bounded() {
        for (len, size, expected) in [(0, 5000, 0), (1, 5000, 1), (5000, 5000, 1), (5001, 5000, 2), (12_345, 5000, 3), (7, 3, 3)] {
            let list = words(len);
            let chunks = chunk(&list, size).unwrap();
            assert_eq!(chunks.len(), expected, "len {len} size {size}");
            assert!(chunks.iter().all(|c| c.words.len() <= size));
        }
    }

    #[test]
    fn concatenated_chunks_rebuild_the_list() {
        let list = words(12_345);
        let chunks = chunk(&list, 5000).unwrap();
        let rebuilt: Vec<String> = chunks.iter().flat_map(|c| c.words.iter().cloned()).collect();
        assert_eq!(rebuilt, list);
        assert_eq!(chunks.iter().map(|c| c.index).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn zero_size_is_an_error() {
        assert!(chunk(&words(3), 0).is_err());
        assert!(chunk(&[], 0).is_err());
    }
}

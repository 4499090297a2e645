use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::Document;

/// Directory scanning and whole-file text I/O shared by both stages.
///
/// Only the top level of a directory is scanned; stage directories are flat.
#[derive(Debug, Default, Clone)]
pub struct DataProcessor;

impl DataProcessor {
    pub fn new() -> Self { Self }

    /// `.txt` files directly under `root`, sorted. A missing directory yields none.
    pub fn list_txt_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut txt_files = Vec::new();
        for entry in walkdir::WalkDir::new(root).min_depth(1).max_depth(1).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
            let path = entry.path(); if path.extension().and_then(|s| s.to_str()) == Some("txt") { txt_files.push(path.to_path_buf()); }
        }
        txt_files.sort(); txt_files
    }

    /// Reads a file, dropping invalid UTF-8 sequences instead of failing.
    pub fn read_document(&self, file_path: &Path) -> Result<Document> {
        let bytes = fs::read(file_path).map_err(|e| Error::io(file_path, e))?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => e.as_bytes().utf8_chunks().map(|chunk| chunk.valid()).collect(),
        };
        Ok(Document { name: self.extract_name(file_path), path: file_path.to_path_buf(), text })
    }

    /// Writes `text` to `file_path`, creating parent directories as needed.
    pub fn write_text(&self, file_path: &Path, text: &str) -> Result<()> {
        if let Some(parent) = file_path.parent() { fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?; }
        fs::write(file_path, text).map_err(|e| Error::io(file_path, e))
    }

    /// Removes `dir` only if it exists and holds no entries. Returns whether it was removed.
    pub fn remove_dir_if_empty(&self, dir: &Path) -> Result<bool> {
        let mut entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(Error::io(dir, e)),
        };
        if entries.next().is_some() { return Ok(false); }
        fs::remove_dir(dir).map_err(|e| Error::io(dir, e))?;
        Ok(true)
    }

    fn extract_name(&self, file_path: &Path) -> String {
        file_path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default()
    }
}

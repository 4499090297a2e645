use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use wordsieve_core::error::{Error, Result};
use wordsieve_core::types::Completion;

/// Creates the empty completion marker, replacing any previous one.
pub fn write_marker(marker: &Path) -> Result<()> {
    if let Some(parent) = marker.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(marker, b"").map_err(|e| Error::io(marker, e))
}

/// Consumes the marker. `None` means stage 1 has not completed since the
/// last claim, and nothing was changed.
pub fn claim_marker(marker: &Path, filtered_dir: &Path) -> Result<Option<Completion>> {
    match fs::remove_file(marker) {
        Ok(()) => Ok(Some(Completion::from_directory(filtered_dir))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(marker, e)),
    }
}

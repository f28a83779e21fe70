use std::path::{Path, PathBuf};
use std::{fs, io};

use thiserror::Error;

use crate::series::Dataset;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to encode dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output file: {0}")]
    Io(#[from] io::Error),
}

/// Persist the dataset as JSON.
///
/// The encoding is written to a sibling temporary file and renamed into
/// place, so a failed run never leaves a truncated artifact at `path`.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<(), OutputError> {
    let json = serde_json::to_string(dataset)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "dataset".into());
    name.push(".tmp");
    path.with_file_name(name)
}

use anyhow::{Context, Result};
use csv::{Reader, ReaderBuilder, Trim};
use std::fs::File;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE: &str = "swisslotto_numbers.csv";

/// Resolves `file` against the working directory when it is relative.
pub fn source_path(file: &Path) -> PathBuf {
    if file.is_absolute() {
        return file.to_path_buf();
    }
    let mut path = std::env::current_dir().unwrap_or_default();
    path.push(file);
    path
}

/// Opens the source read-only. The returned reader owns the file handle,
/// which is closed when the reader is dropped.
pub fn open_source(path: &Path) -> Result<Reader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Impossible d'ouvrir la source {:?}", path))?;
    log::info!("Source ouverte : {}", path.display());

    Ok(ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file))
}

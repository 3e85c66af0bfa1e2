// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::{
    config::options::ExportOptions,
    details::BusinessDetails,
    export::{write_details_csv, write_urls},
};

/// Write the URL list to `export.out_path()`, creating parent directories.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, urls: &[String]) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();
    let out = create_file(&path)?;
    write_urls(out, urls, export)?;
    logf!("Export: {} URLs -> {}", urls.len(), path.display());
    Ok(path)
}

/// Business details always go out as CSV, next to the URL export
/// under their own name (`<stem>_details.csv`).
pub fn write_details_export(
    export: &ExportOptions,
    details: &[BusinessDetails],
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.details_path();
    let out = create_file(&path)?;
    write_details_csv(out, details, export.include_headers)?;
    logf!("Export: {} business rows -> {}", details.len(), path.display());
    Ok(path)
}

fn create_file(path: &Path) -> Result<BufWriter<File>, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?)) // truncate/overwrite
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

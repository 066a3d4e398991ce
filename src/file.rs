// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::consts::{DEFAULT_OUT_DIR, DEFAULT_RESULTS_FILE},
    render::Surface,
};

pub fn default_results_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_RESULTS_FILE)
}

/// Write `surface` as a standalone HTML page. Creates parent directories.
/// Returns the path written to.
pub fn write_results_page(path: &Path, surface: &Surface) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, surface.page_html())?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

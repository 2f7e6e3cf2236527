//! Resume text loading. PDFs go through `pdf-extract`; anything else is read as UTF-8.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Resume file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read resume: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to extract PDF text: {0}")]
    Pdf(String),

    #[error("Resume {0} contains no extractable text")]
    Empty(PathBuf),
}

/// Loads resume text. A missing path fails before anything is parsed.
pub fn load_resume_text(path: &Path) -> Result<String, ResumeError> {
    if !path.exists() {
        return Err(ResumeError::NotFound(path.to_path_buf()));
    }

    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        pdf_extract::extract_text(path).map_err(|e| ResumeError::Pdf(e.to_string()))?
    } else {
        std::fs::read_to_string(path)?
    };

    if text.trim().is_empty() {
        return Err(ResumeError::Empty(path.to_path_buf()));
    }

    info!("Loaded resume text ({} chars) from {}", text.len(), path.display());
    Ok(text)
}

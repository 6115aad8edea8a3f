use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raw text pulled from some source, ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;

/// Loads a document, picking the reader from the file extension.
pub fn load_path(path: &str) -> Result<LoadedDocument, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let result = match extension.as_deref() {
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        _ => text::load(path),
    };

    match &result {
        Ok(doc) => tracing::info!(source = %doc.source, chars = doc.text.len(), "loaded document"),
        Err(err) => tracing::warn!(path, error = %err, "failed to load document"),
    }

    result
}

/// Reads all of standard input.
pub fn load_stdin() -> Result<LoadedDocument, LoadError> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(LoadedDocument {
        text,
        source: "stdin".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_path_missing_text_file() {
        let result = load_path("/nonexistent/path/notes.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_path_dispatches_pdf_by_extension() {
        let result = load_path("/nonexistent/path/paper.PDF");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_io_error_converts() {
        let err: LoadError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, LoadError::Io(_)));
        assert!(err.to_string().contains("boom"));
    }
}

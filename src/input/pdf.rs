use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Extracts the text layer of a PDF.
///
/// Scanned PDFs with no text layer come back as `EmptyFile` rather than an
/// empty bubble canvas.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let file = Path::new(path);
    if !file.is_file() {
        return Err(LoadError::FileNotFound(file.to_path_buf()));
    }

    let bytes = std::fs::read(file)?;
    let text = pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|err| LoadError::PdfParse(err.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_string()));
    }
    tracing::debug!(bytes = bytes.len(), chars = text.chars().count(), "extracted pdf text");

    Ok(LoadedDocument {
        text,
        source: format!("pdf:{}", file.display()),
    })
}

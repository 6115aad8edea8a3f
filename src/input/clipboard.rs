use super::{LoadError, LoadedDocument};

/// Load text currently held by the system clipboard.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::Clipboard("Clipboard is empty".to_string()));
    }

    Ok(LoadedDocument {
        text,
        source: "clipboard".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_message() {
        let err = LoadError::Clipboard("Clipboard is empty".to_string());
        assert_eq!(err.to_string(), "Clipboard error: Clipboard is empty");
    }
}

//! Cross-platform clipboard utilities.
//!
//! Uses arboard crate for clipboard access.

use arboard::Clipboard;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("nothing to copy")]
    Empty,
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Copy UTF-8 text to the clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    if text.is_empty() {
        return Err(ClipboardError::Empty);
    }

    // arboard requires a new Clipboard instance for each operation
    let mut clipboard =
        Clipboard::new().inspect_err(|e| warn!("failed to initialize clipboard: {}", e))?;
    clipboard
        .set_text(text)
        .inspect_err(|e| warn!("failed to set clipboard text: {}", e))?;
    Ok(())
}

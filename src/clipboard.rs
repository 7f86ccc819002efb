//! Thin platform wrapper for system clipboard access.
//!
//! On Windows, uses `clipboard-win`. Elsewhere, uses `arboard`. On X11 the
//! copied token only survives while a clipboard manager or another client
//! takes ownership before the process exits.

use std::fmt::Display;

use log::warn;

/// Clipboard access failures.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard holds no text")]
    Empty,
}

/// Read text from the system clipboard.
#[cfg(windows)]
pub fn get_text() -> Result<String, ClipboardError> {
    let text = clipboard_win::get_clipboard_string()
        .map_err(unavailable)?;
    non_empty(text)
}

/// Read text from the system clipboard.
#[cfg(not(windows))]
pub fn get_text() -> Result<String, ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(unavailable)?;
    let text = clipboard
        .get_text()
        .map_err(unavailable)?;
    non_empty(text)
}

/// Write text to the system clipboard.
#[cfg(windows)]
pub fn set_text(text: &str) -> Result<(), ClipboardError> {
    clipboard_win::set_clipboard_string(text).map_err(unavailable)
}

/// Write text to the system clipboard.
#[cfg(not(windows))]
pub fn set_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(unavailable)?;
    clipboard
        .set_text(text.to_owned())
        .map_err(unavailable)
}

fn unavailable(e: impl Display) -> ClipboardError {
    warn!("clipboard: {e}");
    ClipboardError::Unavailable(e.to_string())
}

fn non_empty(text: String) -> Result<String, ClipboardError> {
    if text.trim().is_empty() {
        Err(ClipboardError::Empty)
    } else {
        Ok(text)
    }
}

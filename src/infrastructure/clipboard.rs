use arboard::Clipboard;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write clipboard: {0}")]
    Write(String),

    #[error("clipboard task failed: {0}")]
    Task(String),
}

/// Copies text to the system clipboard off the UI thread.
#[derive(Clone, Default)]
pub struct ClipboardService {}

impl ClipboardService {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// # Errors
    /// Returns error if the clipboard cannot be opened or written.
    pub async fn set_text(&self, text: impl Into<String>) -> Result<(), ClipboardError> {
        let text = text.into();
        tokio::task::spawn_blocking(move || {
            let mut clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Write(e.to_string()))?;
            debug!("Copied text to clipboard");
            Ok(())
        })
        .await
        .map_err(|e| ClipboardError::Task(e.to_string()))?
    }
}

use tracing::{debug, warn};

/// Opens URLs in the user's browser.
#[derive(Clone, Default)]
pub struct BrowserService {}

impl BrowserService {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn open(&self, url: impl Into<String>) {
        let url = url.into();
        tokio::task::spawn_blocking(move || match opener::open_browser(&url) {
            Ok(()) => debug!(url = %url, "Opened url in browser"),
            Err(e) => warn!(url = %url, error = %e, "Failed to open url"),
        });
    }
}

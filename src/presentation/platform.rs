//! Host capability helpers.

use std::io::IsTerminal;

/// Where the UI is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEnvironment {
    /// A live terminal driven by key events.
    Interactive,
    /// A one-off rendering printed as text, e.g. `--snapshot`.
    Static,
}

impl HostEnvironment {
    /// Static when a snapshot was requested or stdout is not a terminal.
    #[must_use]
    pub fn detect(snapshot_requested: bool) -> Self {
        if snapshot_requested || !std::io::stdout().is_terminal() {
            Self::Static
        } else {
            Self::Interactive
        }
    }

    /// Picks `static_value` on a static host and `interactive_value` otherwise.
    #[must_use]
    pub fn client_only_value<T>(self, static_value: T, interactive_value: T) -> T {
        match self {
            Self::Static => static_value,
            Self::Interactive => interactive_value,
        }
    }
}

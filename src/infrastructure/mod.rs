//! Infrastructure layer with external service adapters.

/// Dad Jokes REST client.
pub mod api;
/// Browser launching.
pub mod browser;
/// Clipboard access.
pub mod clipboard;
/// Application configuration.
pub mod config;
/// Desktop notifications.
pub mod notifications;

pub use api::DadJokesClient;
pub use browser::BrowserService;
pub use clipboard::{ClipboardError, ClipboardService};
pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, ScreenArg, StorageManager};
pub use notifications::DesktopNotificationService;

//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{AppConfig, DEFAULT_API_URL, LogLevel, ThemeConfig, UiConfig};
pub use args::{CliArgs, ScreenArg};
pub use storage::{ConfigError, StorageManager};

//! Presentation layer with UI components and event handling.

/// Event handling.
pub mod events;
/// Host capability detection.
pub mod platform;
/// Colors and styles.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use platform::HostEnvironment;
pub use ui::{App, AppOptions, Tab};

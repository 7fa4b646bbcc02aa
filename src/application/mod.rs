//! Application layer with use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::RandomContent;
pub use services::NotificationManager;
pub use use_cases::{AddJokeError, AddJokeUseCase, ListJokesUseCase, LoadRandomUseCase};

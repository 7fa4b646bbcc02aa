//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// In-app notifications.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use entities::{Joke, NewJoke, Picture};
pub use errors::{ApiError, ValidationError};
pub use notification::{Notification, NotificationLevel};
pub use ports::{JokesPort, NotificationPort};

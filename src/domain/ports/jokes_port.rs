//! Jokes API port definition.

use async_trait::async_trait;

use crate::domain::entities::{Joke, NewJoke, Picture};
use crate::domain::errors::ApiError;

/// Port for the remote jokes service.
#[async_trait]
pub trait JokesPort: Send + Sync {
    /// Fetches one random joke. `None` when the server has none.
    async fn random_joke(&self) -> Result<Option<Joke>, ApiError>;

    /// Fetches one random picture. `None` when the server has none.
    async fn random_picture(&self) -> Result<Option<Picture>, ApiError>;

    /// Fetches the full joke collection in server order.
    async fn list_jokes(&self) -> Result<Vec<Joke>, ApiError>;

    /// Creates a joke and returns the stored object.
    async fn create_joke(&self, joke: &NewJoke) -> Result<Joke, ApiError>;
}

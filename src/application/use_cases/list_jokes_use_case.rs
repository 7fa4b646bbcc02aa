use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::Joke;
use crate::domain::errors::ApiError;
use crate::domain::ports::JokesPort;

/// Fetches the full joke collection.
#[derive(Clone)]
pub struct ListJokesUseCase {
    jokes_port: Arc<dyn JokesPort>,
}

impl ListJokesUseCase {
    #[must_use]
    pub const fn new(jokes_port: Arc<dyn JokesPort>) -> Self {
        Self { jokes_port }
    }

    /// # Errors
    /// Returns error if the request or decoding fails.
    pub async fn execute(&self) -> Result<Vec<Joke>, ApiError> {
        match self.jokes_port.list_jokes().await {
            Ok(jokes) => {
                debug!(count = jokes.len(), "Loaded jokes");
                Ok(jokes)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch jokes");
                Err(e)
            }
        }
    }
}

//! Random joke and picture loading.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::dto::RandomContent;
use crate::domain::errors::ApiError;
use crate::domain::ports::JokesPort;

/// Fetches a random joke and a random picture concurrently.
#[derive(Clone)]
pub struct LoadRandomUseCase {
    jokes_port: Arc<dyn JokesPort>,
}

impl LoadRandomUseCase {
    #[must_use]
    pub const fn new(jokes_port: Arc<dyn JokesPort>) -> Self {
        Self { jokes_port }
    }

    /// Runs both requests to completion. A failure of either one fails the
    /// whole load, even when the other succeeded.
    ///
    /// # Errors
    /// Returns the first error in (joke, picture) order.
    pub async fn execute(&self) -> Result<RandomContent, ApiError> {
        let (joke, picture) = tokio::join!(
            self.jokes_port.random_joke(),
            self.jokes_port.random_picture()
        );

        if let Err(e) = &joke {
            warn!(error = %e, "Failed to fetch random joke");
        }
        if let Err(e) = &picture {
            warn!(error = %e, "Failed to fetch random picture");
        }

        let content = RandomContent::new(joke?, picture?);
        debug!(
            has_joke = content.joke.is_some(),
            has_picture = content.picture.is_some(),
            "Random content loaded"
        );
        Ok(content)
    }
}

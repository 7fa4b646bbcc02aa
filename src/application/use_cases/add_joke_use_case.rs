//! Joke submission.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::entities::{Joke, NewJoke};
use crate::domain::errors::{ApiError, ValidationError};
use crate::domain::ports::JokesPort;

/// Why a submission did not produce a joke.
#[derive(Debug, Error)]
pub enum AddJokeError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Validates form values and issues a single create request.
#[derive(Clone)]
pub struct AddJokeUseCase {
    jokes_port: Arc<dyn JokesPort>,
}

impl AddJokeUseCase {
    #[must_use]
    pub const fn new(jokes_port: Arc<dyn JokesPort>) -> Self {
        Self { jokes_port }
    }

    /// Validation happens before any network traffic.
    ///
    /// # Errors
    /// Returns [`AddJokeError::Invalid`] for blank fields and
    /// [`AddJokeError::Api`] when the request fails.
    pub async fn execute(&self, contributor: &str, text: &str) -> Result<Joke, AddJokeError> {
        let new_joke = NewJoke::new(contributor, text).inspect_err(|e| {
            debug!(error = %e, "Rejected joke form");
        })?;

        debug!("Posting joke to API");

        let joke = self.jokes_port.create_joke(&new_joke).await.map_err(|e| {
            warn!(error = %e, "Failed to add joke");
            e
        })?;

        info!(joke_id = %joke.id(), "New joke created");
        Ok(joke)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockJokesPort;
    use test_case::test_case;

    #[tokio::test]
    async fn test_single_request_with_exact_values() {
        let port = Arc::new(MockJokesPort::new());
        let use_case = AddJokeUseCase::new(port.clone());

        let joke = use_case.execute(" Ann", "I'm reading a book on glue ").await.unwrap();

        assert_eq!(port.request_count(), 1);
        let created = port.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].contributor(), " Ann");
        assert_eq!(created[0].text(), "I'm reading a book on glue ");
        assert_eq!(joke.contributor(), " Ann");
    }

    #[test_case("", "joke" ; "empty_contributor")]
    #[test_case("Ann", "   " ; "blank_text")]
    #[test_case(" \t", "\n" ; "both_blank")]
    #[tokio::test]
    async fn test_blank_fields_send_nothing(contributor: &str, text: &str) {
        let port = Arc::new(MockJokesPort::new());
        let use_case = AddJokeUseCase::new(port.clone());

        let result = use_case.execute(contributor, text).await;

        assert!(matches!(
            result,
            Err(AddJokeError::Invalid(ValidationError::MissingFields))
        ));
        assert_eq!(port.request_count(), 0);
    }

    #[tokio::test]
    async fn test_rejected_status_is_reported() {
        let port = Arc::new(MockJokesPort::new());
        port.reject_create_with(400);

        let result = AddJokeUseCase::new(port).execute("Ann", "pun").await;

        assert!(matches!(result, Err(AddJokeError::Api(ref e)) if e.is_status()));
    }
}

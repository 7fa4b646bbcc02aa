//! Dad Jokes API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{
    CreateJokeRequest, JokeListResponse, JokeResponse, PictureResponse, RandomResponse,
};
use crate::domain::entities::{Joke, NewJoke, Picture};
use crate::domain::errors::ApiError;
use crate::domain::ports::JokesPort;

const USER_AGENT: &str = concat!("dadjokes/", env!("CARGO_PKG_VERSION"));

/// REST client for the jokes service.
pub struct DadJokesClient {
    client: Client,
    base_url: String,
}

impl DadJokesClient {
    /// Creates a client without a request timeout.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or HTTP client creation fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, None)
    }

    /// Creates a client, optionally bounding every request by `timeout`.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or HTTP client creation fails.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| ApiError::invalid_url(format!("{base_url}: {e}")))?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        decode(ensure_success(response)?).await
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    warn!(error = %e, "Failed to reach jokes API");
    if e.is_timeout() {
        ApiError::network("request timed out")
    } else if e.is_connect() {
        ApiError::network("failed to connect to jokes API")
    } else {
        ApiError::network(e.to_string())
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    debug!(status = %status, "Response status");

    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::status(status.as_u16()))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        warn!(error = %e, "Failed to parse response");
        ApiError::decode(e.to_string())
    })
}

#[async_trait]
impl JokesPort for DadJokesClient {
    async fn random_joke(&self) -> Result<Option<Joke>, ApiError> {
        let response: RandomResponse<JokeResponse> = self.get_json("random").await?;
        Ok(response.into_option()?.map(Joke::from))
    }

    async fn random_picture(&self) -> Result<Option<Picture>, ApiError> {
        let response: RandomResponse<PictureResponse> = self.get_json("random_picture").await?;
        Ok(response.into_option()?.map(Picture::from))
    }

    async fn list_jokes(&self) -> Result<Vec<Joke>, ApiError> {
        let response: JokeListResponse = self.get_json("jokes").await?;
        Ok(response.into_jokes())
    }

    async fn create_joke(&self, joke: &NewJoke) -> Result<Joke, ApiError> {
        let url = self.endpoint("jokes");
        debug!(url = %url, "POST");

        let body = CreateJokeRequest {
            text: joke.text(),
            contributor: joke.contributor(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let created: JokeResponse = decode(ensure_success(response)?).await?;
        Ok(created.into())
    }
}

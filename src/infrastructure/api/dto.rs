use serde::{Deserialize, Serialize};

use crate::domain::entities::{Joke, Picture};
use crate::domain::errors::ApiError;

/// Joke object as serialized by the API.
#[derive(Debug, Deserialize)]
pub struct JokeResponse {
    pub id: u64,
    pub text: String,
    pub contributor: String,
    #[serde(default)]
    pub created_at: String,
}

impl From<JokeResponse> for Joke {
    fn from(response: JokeResponse) -> Self {
        Self::new(
            response.id,
            response.text,
            response.contributor,
            response.created_at,
        )
    }
}

/// Picture object as serialized by the API.
#[derive(Debug, Deserialize)]
pub struct PictureResponse {
    pub id: u64,
    pub image_url: String,
    pub contributor: String,
    #[serde(default)]
    pub created_at: String,
}

impl From<PictureResponse> for Picture {
    fn from(response: PictureResponse) -> Self {
        Self::new(
            response.id,
            response.image_url,
            response.contributor,
            response.created_at,
        )
    }
}

/// The random endpoints answer `{}` when there is nothing to pick from.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RandomResponse<T> {
    Found(T),
    Other(serde_json::Map<String, serde_json::Value>),
}

impl<T> RandomResponse<T> {
    /// # Errors
    /// Returns a decode error for a non-empty object of the wrong shape.
    pub fn into_option(self) -> Result<Option<T>, ApiError> {
        match self {
            Self::Found(value) => Ok(Some(value)),
            Self::Other(map) if map.is_empty() => Ok(None),
            Self::Other(map) => {
                let keys: Vec<_> = map.keys().map(String::as_str).collect();
                Err(ApiError::decode(format!(
                    "unexpected object with keys [{}]",
                    keys.join(", ")
                )))
            }
        }
    }
}

/// List endpoint body: paginated wrapper or bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JokeListResponse {
    Paginated { results: Vec<JokeResponse> },
    Bare(Vec<JokeResponse>),
}

impl JokeListResponse {
    #[must_use]
    pub fn into_jokes(self) -> Vec<Joke> {
        let items = match self {
            Self::Paginated { results } => results,
            Self::Bare(items) => items,
        };
        items.into_iter().map(Joke::from).collect()
    }
}

/// Create request body.
#[derive(Debug, Serialize)]
pub struct CreateJokeRequest<'a> {
    pub text: &'a str,
    pub contributor: &'a str,
}

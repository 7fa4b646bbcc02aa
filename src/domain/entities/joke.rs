//! Joke entity.

use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::domain::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JokeId(pub u64);

impl JokeId {
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for JokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for JokeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A joke as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    id: JokeId,
    text: String,
    contributor: String,
    created_at: String,
}

impl Joke {
    #[must_use]
    pub fn new(
        id: u64,
        text: impl Into<String>,
        contributor: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: JokeId(id),
            text: text.into(),
            contributor: contributor.into(),
            created_at: created_at.into(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> JokeId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn contributor(&self) -> &str {
        &self.contributor
    }

    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Attribution line shown under the joke text.
    #[must_use]
    pub fn attribution(&self) -> String {
        format!("- {}", self.contributor)
    }

    /// Formats the creation time, falling back to the raw server value.
    #[must_use]
    pub fn created_display(&self, format: &str) -> String {
        timestamp::format_or_raw(&self.created_at, format)
    }
}

/// Validated payload for creating a joke.
///
/// Both fields must contain something other than whitespace. The values are
/// kept exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJoke {
    text: String,
    contributor: String,
}

impl NewJoke {
    /// Validates the form values.
    ///
    /// # Errors
    /// Returns [`ValidationError::MissingFields`] if either value is blank.
    pub fn new(
        contributor: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let contributor = contributor.into();
        let text = text.into();

        if contributor.trim().is_empty() || text.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(Self { text, contributor })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn contributor(&self) -> &str {
        &self.contributor
    }
}

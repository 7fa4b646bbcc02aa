//! Picture entity.

use serde::{Deserialize, Serialize};

use super::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PictureId(pub u64);

impl std::fmt::Display for PictureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PictureId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A picture reference. Read-only from the client's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    id: PictureId,
    image_url: String,
    contributor: String,
    created_at: String,
}

impl Picture {
    #[must_use]
    pub fn new(
        id: u64,
        image_url: impl Into<String>,
        contributor: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: PictureId(id),
            image_url: image_url.into(),
            contributor: contributor.into(),
            created_at: created_at.into(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> PictureId {
        self.id
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[must_use]
    pub fn contributor(&self) -> &str {
        &self.contributor
    }

    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    #[must_use]
    pub fn attribution(&self) -> String {
        format!("Picture by: {}", self.contributor)
    }

    #[must_use]
    pub fn created_display(&self, format: &str) -> String {
        timestamp::format_or_raw(&self.created_at, format)
    }
}

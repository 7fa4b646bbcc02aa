use crate::domain::entities::{Joke, Picture};

/// Result of the random screen's combined fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandomContent {
    /// `None` when the server has no jokes.
    pub joke: Option<Joke>,
    /// `None` when the server has no pictures.
    pub picture: Option<Picture>,
}

impl RandomContent {
    #[must_use]
    pub const fn new(joke: Option<Joke>, picture: Option<Picture>) -> Self {
        Self { joke, picture }
    }
}

use thiserror::Error;

/// Form validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in both fields")]
    MissingFields,
}

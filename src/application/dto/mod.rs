//! Data transfer objects.

mod random_dto;

pub use random_dto::RandomContent;

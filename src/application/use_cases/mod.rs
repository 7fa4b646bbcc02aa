//! Use case implementations.

mod add_joke_use_case;
mod list_jokes_use_case;
mod load_random_use_case;

pub use add_joke_use_case::{AddJokeError, AddJokeUseCase};
pub use list_jokes_use_case::ListJokesUseCase;
pub use load_random_use_case::LoadRandomUseCase;

//! Domain entity definitions.

mod joke;
mod picture;
mod timestamp;

pub use joke::{Joke, JokeId, NewJoke};
pub use picture::{Picture, PictureId};

mod footer_bar;
mod header_bar;
mod input;
mod joke_card;
mod loading;
mod tab_bar;
mod text_area;

pub use footer_bar::{FooterBar, FooterBarStyle, KeyHint};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use joke_card::JokeCard;
pub use loading::{LoadingIndicator, spinner_frame};
pub use tab_bar::TabBar;
pub use text_area::MultilineInput;


//! UI screens.

mod add_joke_screen;
mod app;
mod backend;
mod common;
mod fetch_state;
mod jokes_list_screen;
mod notification_popup;
mod random_screen;
mod tabs;
pub mod utils;

pub use add_joke_screen::{AddJokeAction, AddJokeScreen, FormFocus, SubmitOutcome, SubmitState};
pub use app::{App, AppOptions};
pub use backend::{Action, Backend, BackendCommand, BackendExecutor};
pub use common::ScreenContext;
pub use fetch_state::{FetchPhase, FetchState, RequestId, RequestIds};
pub use jokes_list_screen::{JokesListAction, JokesListScreen};
pub use notification_popup::NotificationPopup;
pub use random_screen::{RandomAction, RandomScreen};
pub use tabs::{Tab, TabLayout};

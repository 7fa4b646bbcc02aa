//! Random joke and picture.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::common::{self, ScreenContext};
use super::fetch_state::{FetchState, RequestId};
use super::utils::{inset_vertical, wrap_text};
use crate::application::RandomContent;
use crate::domain::{ApiError, Picture};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::StyleName;
use crate::presentation::widgets::{JokeCard, KeyHint};

pub const FETCH_ERROR: &str = "Failed to fetch data";
const LOADING: &str = "Loading...";
const NO_JOKE: &str = "No jokes yet";
const NO_PICTURE: &str = "No pictures yet";

const KEY_HINTS: &[KeyHint] = &[
    KeyHint::new("r", "Refresh"),
    KeyHint::new("y", "Copy joke"),
    KeyHint::new("o", "Open picture"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomAction {
    None,
    Refresh,
    CopyJoke(String),
    OpenPicture(String),
}

#[derive(Debug, Default)]
pub struct RandomScreen {
    state: FetchState<RandomContent>,
}

impl RandomScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self, id: RequestId) {
        self.state.begin_load(id);
    }

    pub fn begin_refresh(&mut self, id: RequestId) -> bool {
        self.state.begin_refresh(id)
    }

    /// Stores a result; any failure becomes the generic message.
    pub fn apply(&mut self, id: RequestId, result: Result<RandomContent, ApiError>) -> bool {
        self.state
            .resolve(id, result.map_err(|_| FETCH_ERROR.to_string()))
    }

    #[must_use]
    pub const fn state(&self) -> &FetchState<RandomContent> {
        &self.state
    }

    #[must_use]
    pub const fn key_hints(&self) -> &'static [KeyHint] {
        KEY_HINTS
    }

    /// Content is only usable when the last request succeeded.
    fn content(&self) -> Option<&RandomContent> {
        if self.state.error().is_some() {
            return None;
        }
        self.state.data()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> RandomAction {
        if EventHandler::is_refresh_event(&key) {
            return RandomAction::Refresh;
        }
        if key.modifiers != KeyModifiers::NONE {
            return RandomAction::None;
        }

        let content = self.content();
        match key.code {
            KeyCode::Char('y') => content
                .and_then(|c| c.joke.as_ref())
                .map_or(RandomAction::None, |j| {
                    RandomAction::CopyJoke(j.text().to_string())
                }),
            KeyCode::Char('o') => content
                .and_then(|c| c.picture.as_ref())
                .map_or(RandomAction::None, |p| {
                    RandomAction::OpenPicture(p.image_url().to_string())
                }),
            _ => RandomAction::None,
        }
    }

    pub fn render(&self, ctx: &ScreenContext<'_>, area: Rect, buf: &mut Buffer) {
        let area = common::container(ctx, area, buf);

        let nothing_yet = self.state.data().is_none() && self.state.error().is_none();
        if self.state.is_loading() || nothing_yet {
            common::render_loading(ctx, LOADING, area, buf);
            return;
        }

        let refresh_rows = u16::from(self.state.is_refreshing());
        let [refresh_area, title_area, body] = Layout::vertical([
            Constraint::Length(refresh_rows),
            Constraint::Length(common::title_height(ctx)),
            Constraint::Fill(1),
        ])
        .areas(area);

        if self.state.is_refreshing() {
            common::render_refreshing(ctx, refresh_area, buf);
        }
        common::render_title(ctx, "Dad Jokes", title_area, buf);

        if let Some(message) = self.state.error() {
            let height = common::error_height(ctx, message, body.width);
            let [error_area, _] =
                Layout::vertical([Constraint::Length(height), Constraint::Fill(1)]).areas(body);
            common::render_error(ctx, message, error_area, buf);
            return;
        }

        if let Some(content) = self.content() {
            Self::render_content(ctx, content, body, buf);
        }
    }

    fn render_content(
        ctx: &ScreenContext<'_>,
        content: &RandomContent,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let card_spec = ctx.styles.get(StyleName::JokeCard);
        let card = content.joke.as_ref().map(|joke| {
            JokeCard::new(joke, ctx.styles)
                .timestamp(joke.created_display(ctx.timestamp_format))
        });
        let card_height = card
            .as_ref()
            .map_or(1, |c| c.height(area.width))
            .saturating_add(2 * card_spec.margin_y);

        let [card_area, picture_area] =
            Layout::vertical([Constraint::Length(card_height), Constraint::Fill(1)]).areas(area);

        match card {
            Some(card) => card.render(inset_vertical(card_area, card_spec.margin_y), buf),
            None => common::render_placeholder(ctx, NO_JOKE, card_area, buf),
        }

        match &content.picture {
            Some(picture) => Self::render_picture(ctx, picture, picture_area, buf),
            None => common::render_placeholder(ctx, NO_PICTURE, picture_area, buf),
        }
    }

    fn render_picture(ctx: &ScreenContext<'_>, picture: &Picture, area: Rect, buf: &mut Buffer) {
        let container = ctx.styles.get(StyleName::PictureContainer);
        let area = inset_vertical(area, container.margin_y);

        let spec = ctx.styles.get(StyleName::Picture);
        let borders = if spec.border.is_some() { 2 } else { 0 };
        let url_width = area
            .width
            .saturating_sub(spec.padding.left + spec.padding.right + borders);
        let url: Vec<Line> = wrap_text(picture.image_url(), url_width)
            .into_iter()
            .map(Line::from)
            .collect();
        let frame_height = u16::try_from(url.len())
            .unwrap_or(u16::MAX)
            .saturating_add(borders + spec.padding.top + spec.padding.bottom);

        let [frame_area, caption_area] =
            Layout::vertical([Constraint::Length(frame_height), Constraint::Length(1)])
                .areas(area);

        Paragraph::new(url)
            .block(spec.block())
            .style(spec.style)
            .alignment(spec.alignment)
            .render(frame_area, buf);

        let caption = ctx.styles.get(StyleName::ContributorText);
        Paragraph::new(picture.attribution())
            .style(caption.style)
            .alignment(container.alignment)
            .render(caption_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Joke;
    use crate::presentation::theme::{StyleSheet, Theme};
    use ratatui::{Terminal, backend::TestBackend};

    fn content() -> RandomContent {
        RandomContent::new(
            Some(Joke::new(
                1,
                "I'm reading a book on anti-gravity.",
                "Dad",
                "2023-06-15T12:00:00Z",
            )),
            Some(Picture::new(2, "https://example.com/pic.jpg", "Mom", "")),
        )
    }

    fn render(screen: &RandomScreen) -> String {
        let styles = StyleSheet::default();
        let theme = Theme::default();
        let ctx = ScreenContext {
            styles: &styles,
            theme: &theme,
            tick: 0,
            timestamp_format: "%Y",
        };
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| screen.render(&ctx, f.area(), f.buffer_mut()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded() -> RandomScreen {
        let mut screen = RandomScreen::new();
        screen.begin_load(RequestId::new(1));
        assert!(screen.apply(RequestId::new(1), Ok(content())));
        screen
    }

    #[test]
    fn test_loading_indicator() {
        let mut screen = RandomScreen::new();
        screen.begin_load(RequestId::new(1));
        assert!(render(&screen).contains("Loading..."));
    }

    #[test]
    fn test_renders_joke_and_picture() {
        let text = render(&loaded());
        assert!(text.contains("Dad Jokes"));
        assert!(text.contains("anti-gravity"));
        assert!(text.contains("- Dad"));
        assert!(text.contains("https://example.com/pic.jpg"));
        assert!(text.contains("Picture by: Mom"));
        assert!(text.contains("2023"));
    }

    #[test]
    fn test_long_picture_url_wraps() {
        let url = format!("https://example.com/{}/END.jpg", "p".repeat(100));
        let mut screen = RandomScreen::new();
        screen.begin_load(RequestId::new(1));
        let content = RandomContent::new(None, Some(Picture::new(2, url, "Mom", "")));
        assert!(screen.apply(RequestId::new(1), Ok(content)));

        let text = render(&screen);
        assert!(text.contains("https://example.com/"));
        assert!(text.contains("END.jpg"));
        assert!(text.contains("Picture by: Mom"));
    }

    #[test]
    fn test_failure_replaces_content() {
        let mut screen = loaded();
        assert!(screen.begin_refresh(RequestId::new(2)));
        screen.apply(RequestId::new(2), Err(ApiError::status(500)));

        let text = render(&screen);
        assert!(text.contains(FETCH_ERROR));
        assert!(!text.contains("anti-gravity"));
        assert_eq!(
            screen.handle_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE)),
            RandomAction::None
        );
    }

    #[test]
    fn test_refresh_keeps_content_visible() {
        let mut screen = loaded();
        assert!(screen.begin_refresh(RequestId::new(2)));

        let text = render(&screen);
        assert!(text.contains("Refreshing..."));
        assert!(text.contains("anti-gravity"));
    }

    #[test]
    fn test_empty_server_shows_placeholders() {
        let mut screen = RandomScreen::new();
        screen.begin_load(RequestId::new(1));
        screen.apply(RequestId::new(1), Ok(RandomContent::default()));

        let text = render(&screen);
        assert!(text.contains(NO_JOKE));
        assert!(text.contains(NO_PICTURE));
    }

    #[test]
    fn test_stale_result_ignored() {
        let mut screen = RandomScreen::new();
        screen.begin_load(RequestId::new(1));
        screen.begin_load(RequestId::new(2));

        assert!(!screen.apply(RequestId::new(1), Ok(content())));
        assert!(screen.state().is_loading());
    }

    #[test]
    fn test_keys() {
        let mut screen = loaded();
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);

        assert_eq!(screen.handle_key(key('r')), RandomAction::Refresh);
        assert_eq!(
            screen.handle_key(key('y')),
            RandomAction::CopyJoke("I'm reading a book on anti-gravity.".to_string())
        );
        assert_eq!(
            screen.handle_key(key('o')),
            RandomAction::OpenPicture("https://example.com/pic.jpg".to_string())
        );
    }
}

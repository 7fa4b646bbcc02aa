//! Scrollable list of every joke.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::common::{self, ScreenContext};
use super::fetch_state::{FetchState, RequestId};
use super::utils::wrap_text;
use crate::domain::{ApiError, Joke};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::StyleName;
use crate::presentation::widgets::KeyHint;

pub const FETCH_ERROR: &str = "Failed to fetch jokes";
const LOADING: &str = "Loading jokes...";
const EMPTY: &str = "No jokes found";
/// Blank rows between entries.
const SEPARATOR_ROWS: u16 = 1;
const PAGE: usize = 5;

const KEY_HINTS: &[KeyHint] = &[
    KeyHint::new("↑↓", "Move"),
    KeyHint::new("r", "Refresh"),
    KeyHint::new("y", "Copy joke"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JokesListAction {
    None,
    Refresh,
    CopyJoke(String),
}

#[derive(Debug, Default)]
pub struct JokesListScreen {
    state: FetchState<Vec<Joke>>,
    selected: usize,
}

impl JokesListScreen {
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

    pub fn apply(&mut self, id: RequestId, result: Result<Vec<Joke>, ApiError>) -> bool {
        let applied = self
            .state
            .resolve(id, result.map_err(|_| FETCH_ERROR.to_string()));
        if applied {
            self.selected = self.selected.min(self.len().saturating_sub(1));
        }
        applied
    }

    #[must_use]
    pub const fn state(&self) -> &FetchState<Vec<Joke>> {
        &self.state
    }

    #[must_use]
    pub const fn key_hints(&self) -> &'static [KeyHint] {
        KEY_HINTS
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Jokes currently shown; empty while an error is displayed.
    #[must_use]
    pub fn jokes(&self) -> &[Joke] {
        if self.state.error().is_some() {
            return &[];
        }
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.jokes().len()
    }

    fn select(&mut self, index: usize) {
        self.selected = index.min(self.len().saturating_sub(1));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> JokesListAction {
        if EventHandler::is_refresh_event(&key) {
            return JokesListAction::Refresh;
        }
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return JokesListAction::None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select(self.selected.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.select(self.selected + 1),
            KeyCode::PageUp => self.select(self.selected.saturating_sub(PAGE)),
            KeyCode::PageDown => self.select(self.selected + PAGE),
            KeyCode::Home | KeyCode::Char('g') => self.select(0),
            KeyCode::End | KeyCode::Char('G') => self.select(usize::MAX),
            KeyCode::Char('y') => {
                if let Some(joke) = self.jokes().get(self.selected) {
                    return JokesListAction::CopyJoke(joke.text().to_string());
                }
            }
            _ => {}
        }
        JokesListAction::None
    }

    pub fn render(&self, ctx: &ScreenContext<'_>, area: Rect, buf: &mut Buffer) {
        let area = common::container(ctx, area, buf);

        if self.state.is_loading() || (self.state.data().is_none() && self.state.error().is_none())
        {
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
        common::render_title(ctx, "All Jokes", title_area, buf);

        if let Some(message) = self.state.error() {
            let height = common::error_height(ctx, message, body.width);
            let [error_area, _] =
                Layout::vertical([Constraint::Length(height), Constraint::Fill(1)]).areas(body);
            common::render_error(ctx, message, error_area, buf);
            return;
        }

        let jokes = self.jokes();
        if jokes.is_empty() {
            let [_, empty_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(body);
            common::render_placeholder(ctx, EMPTY, empty_area, buf);
            return;
        }

        self.render_items(ctx, jokes, body, buf);
    }

    fn render_items(&self, ctx: &ScreenContext<'_>, jokes: &[Joke], area: Rect, buf: &mut Buffer) {
        let heights: Vec<u16> = jokes
            .iter()
            .map(|j| item_height(ctx, j, area.width))
            .collect();
        let first = first_visible(&heights, self.selected, area.height);

        let mut y = area.y;
        for (index, joke) in jokes.iter().enumerate().skip(first) {
            if y >= area.bottom() {
                break;
            }
            let height = heights[index].min(area.bottom() - y);
            let item_area = Rect::new(area.x, y, area.width, height);
            render_item(ctx, joke, index == self.selected, item_area, buf);
            y = y.saturating_add(heights[index] + SEPARATOR_ROWS);
        }
    }
}

fn text_width(ctx: &ScreenContext<'_>, width: u16) -> u16 {
    let spec = ctx.styles.get(StyleName::ListItem);
    let borders = if spec.border.is_some() { 2 } else { 0 };
    width.saturating_sub(spec.padding.left + spec.padding.right + borders)
}

fn item_height(ctx: &ScreenContext<'_>, joke: &Joke, width: u16) -> u16 {
    let spec = ctx.styles.get(StyleName::ListItem);
    let borders = if spec.border.is_some() { 2 } else { 0 };
    let text_rows = wrap_text(joke.text(), text_width(ctx, width)).len();
    u16::try_from(text_rows)
        .unwrap_or(u16::MAX)
        .saturating_add(2 + borders + spec.padding.top + spec.padding.bottom)
}

/// Index of the first entry drawn so that `selected` is fully visible.
fn first_visible(heights: &[u16], selected: usize, viewport: u16) -> usize {
    let mut first = selected.min(heights.len().saturating_sub(1));
    let mut used = heights.get(first).copied().unwrap_or(0);

    while first > 0 {
        let needed = used + SEPARATOR_ROWS + heights[first - 1];
        if needed > viewport {
            break;
        }
        used = needed;
        first -= 1;
    }

    first
}

fn render_item(ctx: &ScreenContext<'_>, joke: &Joke, selected: bool, area: Rect, buf: &mut Buffer) {
    let spec = ctx.styles.get(StyleName::ListItem);
    let block = if selected {
        spec.block()
            .border_style(spec.border_style.add_modifier(Modifier::BOLD))
    } else {
        spec.block().border_style(ctx.theme.dimmed_style)
    };
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines: Vec<Line> = wrap_text(joke.text(), inner.width)
        .into_iter()
        .map(|row| Line::styled(row, ctx.styles.style(StyleName::JokeText)))
        .collect();

    let contributor = ctx.styles.get(StyleName::ContributorText);
    lines.push(
        Line::styled(joke.attribution(), contributor.style).alignment(contributor.alignment),
    );
    lines.push(
        Line::styled(joke.created_display(ctx.timestamp_format), ctx.theme.dimmed_style)
            .alignment(contributor.alignment),
    );

    Paragraph::new(lines).render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::theme::{StyleSheet, Theme};
    use ratatui::{Terminal, backend::TestBackend};

    fn jokes(n: u64) -> Vec<Joke> {
        (1..=n)
            .map(|i| Joke::new(i, format!("joke number {i}"), format!("user{i}"), ""))
            .collect()
    }

    fn render(screen: &JokesListScreen, height: u16) -> String {
        let styles = StyleSheet::default();
        let theme = Theme::default();
        let ctx = ScreenContext {
            styles: &styles,
            theme: &theme,
            tick: 0,
            timestamp_format: "%Y",
        };
        let mut terminal = Terminal::new(TestBackend::new(60, height)).unwrap();
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

    fn loaded(list: Vec<Joke>) -> JokesListScreen {
        let mut screen = JokesListScreen::new();
        screen.begin_load(RequestId::new(1));
        assert!(screen.apply(RequestId::new(1), Ok(list)));
        screen
    }

    #[test]
    fn test_renders_entries_in_order() {
        let text = render(&loaded(jokes(2)), 40);
        let first = text.find("joke number 1").unwrap();
        let second = text.find("joke number 2").unwrap();
        assert!(first < second);
        assert!(text.contains("- user1"));
        assert!(!text.contains(EMPTY));
    }

    #[test]
    fn test_empty_state() {
        let text = render(&loaded(Vec::new()), 20);
        assert!(text.contains(EMPTY));
    }

    #[test]
    fn test_error_replaces_list() {
        let mut screen = loaded(jokes(1));
        assert!(screen.begin_refresh(RequestId::new(2)));
        screen.apply(RequestId::new(2), Err(ApiError::network("down")));

        let text = render(&screen, 20);
        assert!(text.contains(FETCH_ERROR));
        assert!(!text.contains("joke number 1"));
    }

    #[test]
    fn test_loading() {
        let mut screen = JokesListScreen::new();
        screen.begin_load(RequestId::new(1));
        assert!(render(&screen, 10).contains(LOADING));
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut screen = loaded(jokes(10));
        screen.handle_key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
        assert_eq!(screen.selected(), 9);

        let text = render(&screen, 20);
        assert!(text.contains("joke number 10"));
        assert!(!text.contains("joke number 1\u{20}"));
    }

    #[test]
    fn test_selection_clamped() {
        let mut screen = loaded(jokes(3));
        screen.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(screen.selected(), 0);
        screen.handle_key(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE));
        assert_eq!(screen.selected(), 2);

        assert!(screen.begin_refresh(RequestId::new(2)));
        screen.apply(RequestId::new(2), Ok(jokes(1)));
        assert_eq!(screen.selected(), 0);
    }

    #[test]
    fn test_copy_selected() {
        let mut screen = loaded(jokes(2));
        screen.handle_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        assert_eq!(
            screen.handle_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE)),
            JokesListAction::CopyJoke("joke number 2".to_string())
        );
    }

    #[test]
    fn test_first_visible() {
        assert_eq!(first_visible(&[3, 3, 3], 0, 10), 0);
        assert_eq!(first_visible(&[3, 3, 3], 2, 11), 0);
        assert_eq!(first_visible(&[3, 3, 3], 2, 7), 1);
        assert_eq!(first_visible(&[], 0, 7), 0);
    }
}

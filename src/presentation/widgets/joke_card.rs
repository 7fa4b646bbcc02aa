use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::domain::Joke;
use crate::presentation::theme::{StyleName, StyleSheet};
use crate::presentation::ui::utils::wrap_text;

/// Card showing a joke and its attribution.
pub struct JokeCard<'a> {
    joke: &'a Joke,
    styles: &'a StyleSheet,
    timestamp: Option<String>,
}

impl<'a> JokeCard<'a> {
    #[must_use]
    pub const fn new(joke: &'a Joke, styles: &'a StyleSheet) -> Self {
        Self {
            joke,
            styles,
            timestamp: None,
        }
    }

    /// Adds a formatted creation time under the attribution.
    #[must_use]
    pub fn timestamp(mut self, timestamp: String) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Rows needed at `width`, borders and padding included.
    #[must_use]
    pub fn height(&self, width: u16) -> u16 {
        let card = self.styles.get(StyleName::JokeCard);
        let chrome_x = card.padding.left + card.padding.right + 2;
        let chrome_y = card.padding.top + card.padding.bottom + 2;
        let text_rows = wrap_text(self.joke.text(), width.saturating_sub(chrome_x)).len();
        let text_rows = u16::try_from(text_rows).unwrap_or(u16::MAX);
        let extra = 1 + u16::from(self.timestamp.is_some());
        text_rows.saturating_add(extra + chrome_y)
    }
}

impl Widget for JokeCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = self.styles.get(StyleName::JokeCard);
        let block = card.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let footer_rows = 1 + u16::from(self.timestamp.is_some());
        let [text_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(footer_rows)]).areas(inner);

        let text: Vec<Line> = wrap_text(self.joke.text(), text_area.width)
            .into_iter()
            .map(Line::from)
            .collect();
        Paragraph::new(text)
            .style(self.styles.style(StyleName::JokeText))
            .render(text_area, buf);

        let contributor = self.styles.get(StyleName::ContributorText);
        let mut lines = vec![Line::from(self.joke.attribution())];
        if let Some(ts) = self.timestamp {
            lines.push(Line::from(ts));
        }
        Paragraph::new(lines)
            .style(contributor.style)
            .alignment(contributor.alignment)
            .render(footer_area, buf);
    }
}

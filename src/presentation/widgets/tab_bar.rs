use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

/// Row of destinations, each drawn as `icon label`.
pub struct TabBar<'a> {
    entries: Vec<(&'a str, &'a str)>,
    selected: usize,
    active_style: Style,
    inactive_style: Style,
}

impl<'a> TabBar<'a> {
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (&'a str, &'a str)>, selected: usize) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            selected,
            active_style: Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            inactive_style: Style::default(),
        }
    }

    #[must_use]
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.active_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        self.inactive_style = theme.dimmed_style;
        self
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles = self
            .entries
            .iter()
            .map(|(icon, label)| Line::from(format!("{icon} {label}")));

        Tabs::new(titles)
            .select(self.selected)
            .style(self.inactive_style)
            .highlight_style(self.active_style)
            .divider("│")
            .padding(" ", " ")
            .render(area, buf);
    }
}

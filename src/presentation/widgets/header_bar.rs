use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub title: Style,
    pub busy: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        use crate::presentation::theme::adapter::ColorConverter;

        let accent = theme.accent;
        let version_bg = ColorConverter::tone(accent, 0.08, 0.5);

        Self {
            app_name: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default().bg(version_bg).fg(Color::White),
            busy: Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            title: Style::default().add_modifier(Modifier::BOLD),
            busy: Style::default().fg(Color::Yellow),
        }
    }
}

/// Top bar with the app name, version and the active screen title.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    title: &'a str,
    busy: bool,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            title: "",
            busy: false,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Shows a marker while any request is in flight.
    #[must_use]
    pub const fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let name = format!(" {} ", self.app_name.to_uppercase());
        let version = format!(" v{} ", self.version);
        let left_width = u16::try_from(name.width() + 1 + version.width()).unwrap_or(u16::MAX);

        let left_line = Line::from(vec![
            Span::styled(name, self.style.app_name),
            Span::raw(" "),
            Span::styled(version, self.style.version),
        ]);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let title_width = u16::try_from(self.title.width()).unwrap_or(u16::MAX);
        if title_width > 0 && title_width + 2 * left_width < area.width {
            let x = area.x + (area.width - title_width) / 2;
            Paragraph::new(Span::styled(self.title, self.style.title))
                .render(Rect::new(x, area.y, title_width, 1), buf);
        }

        if self.busy {
            let marker = " ● ";
            let width = u16::try_from(marker.width()).unwrap_or(u16::MAX);
            if width < area.width.saturating_sub(left_width) {
                let right_area = Rect::new(area.right().saturating_sub(width), area.y, width, 1);
                Paragraph::new(Span::styled(marker, self.style.busy)).render(right_area, buf);
            }
        }
    }
}

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for a UI tick counter.
#[must_use]
pub fn spinner_frame(tick: usize) -> &'static str {
    FRAMES[tick % FRAMES.len()]
}

/// Centered spinner with a message.
pub struct LoadingIndicator<'a> {
    message: &'a str,
    tick: usize,
    style: Style,
}

impl<'a> LoadingIndicator<'a> {
    #[must_use]
    pub fn new(message: &'a str, tick: usize) -> Self {
        Self {
            message,
            tick,
            style: Style::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for LoadingIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        Paragraph::new(format!("{} {}", spinner_frame(self.tick), self.message))
            .style(self.style)
            .alignment(Alignment::Center)
            .render(middle, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(FRAMES.len()));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }
}

//! Multi-line text input backed by `tui-textarea`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};
use tui_textarea::{CursorMove, TextArea};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::presentation::theme::StyleSpec;

pub struct MultilineInput {
    textarea: TextArea<'static>,
    label: String,
    placeholder: String,
    focused: bool,
    disabled: bool,
}

impl MultilineInput {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            textarea: TextArea::default(),
            label: label.into(),
            placeholder: String::new(),
            focused: false,
            disabled: false,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Current text with lines joined by `\n`.
    #[must_use]
    pub fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textarea.is_empty()
    }

    pub fn set_value(&mut self, value: &str) {
        self.textarea = TextArea::new(value.split('\n').map(String::from).collect());
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn clear(&mut self) {
        self.textarea = TextArea::default();
    }

    /// Applies an editing key. Returns whether the key was used.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.disabled {
            return false;
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.textarea.insert_char(c);
            }
            KeyCode::Enter => self.textarea.insert_newline(),
            KeyCode::Backspace => {
                self.textarea.delete_char();
            }
            KeyCode::Delete => {
                self.textarea.delete_next_char();
            }
            KeyCode::Left => self.textarea.move_cursor(CursorMove::Back),
            KeyCode::Right => self.textarea.move_cursor(CursorMove::Forward),
            KeyCode::Up => self.textarea.move_cursor(CursorMove::Up),
            KeyCode::Down => self.textarea.move_cursor(CursorMove::Down),
            KeyCode::Home => self.textarea.move_cursor(CursorMove::Head),
            KeyCode::End => self.textarea.move_cursor(CursorMove::End),
            _ => return false,
        }
        true
    }

    pub fn render_with(&self, spec: &StyleSpec, accent: Color, area: Rect, buf: &mut Buffer) {
        let mut block = spec.block().title(format!(" {} ", self.label));
        if self.focused && !self.disabled {
            block = block.border_style(Style::default().fg(accent));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let (rows, cursor_row, cursor_col) = self.display_rows(inner.width);
        let cursor_row = u16::try_from(cursor_row).unwrap_or(u16::MAX);
        let scroll_y = cursor_row.saturating_sub(inner.height.saturating_sub(1));

        if self.textarea.is_empty() {
            Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: false })
                .render(inner, buf);
        } else {
            let text_style = if self.disabled {
                Style::default().fg(Color::Gray)
            } else {
                spec.style
            };
            Paragraph::new(rows.into_iter().map(Line::raw).collect::<Vec<_>>())
                .style(text_style)
                .scroll((scroll_y, 0))
                .render(inner, buf);
        }

        if self.focused && !self.disabled {
            let x = inner.x.saturating_add(cursor_col);
            let y = inner.y.saturating_add(cursor_row - scroll_y);
            if x < inner.right() && y < inner.bottom() {
                buf[(x, y)].set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }

    /// Soft-wraps every line at `width` columns. Also returns the cursor's
    /// display row and column within the wrapped rows.
    fn display_rows(&self, width: u16) -> (Vec<String>, usize, u16) {
        let (line_index, char_index) = self.textarea.cursor();
        let mut rows = Vec::new();
        let mut cursor = (0, 0);

        for (index, line) in self.textarea.lines().iter().enumerate() {
            let mut wrapped = soft_wrap(line, width);
            if index == line_index {
                let offset = wrapped
                    .iter()
                    .rposition(|(start, _)| *start <= char_index)
                    .unwrap_or(0);
                let (start, text) = &wrapped[offset];
                let prefix: String = text.chars().take(char_index - start).collect();
                let col = u16::try_from(prefix.width()).unwrap_or(u16::MAX);
                cursor = if col >= width {
                    // Cursor sits past a full last row: give it a row of its own.
                    wrapped.push((char_index, String::new()));
                    (rows.len() + offset + 1, 0)
                } else {
                    (rows.len() + offset, col)
                };
            }
            rows.extend(wrapped.into_iter().map(|(_, text)| text));
        }

        (rows, cursor.0, cursor.1)
    }
}

/// Splits `line` into rows of at most `width` display columns, keeping the
/// char index each row starts at.
fn soft_wrap(line: &str, width: u16) -> Vec<(usize, String)> {
    let width = usize::from(width.max(1));
    let mut rows = vec![(0, String::new())];
    let mut row_width = 0;

    for (index, c) in line.chars().enumerate() {
        let w = c.width().unwrap_or(0);
        if row_width + w > width && row_width > 0 {
            rows.push((index, String::new()));
            row_width = 0;
        }
        if let Some((_, row)) = rows.last_mut() {
            row.push(c);
        }
        row_width += w;
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::theme::{StyleName, StyleSheet};
    use ratatui::{Terminal, backend::TestBackend};

    const LONG_JOKE: &str =
        "I only know twenty five letters of the alphabet because I don't know y. ENDMARK";

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut MultilineInput, s: &str) {
        for c in s.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_enter_inserts_newline() {
        let mut input = MultilineInput::new("Joke");
        type_str(&mut input, "Knock knock");
        input.handle_key(key(KeyCode::Enter));
        type_str(&mut input, "Who's there?");

        assert_eq!(input.value(), "Knock knock\nWho's there?");
    }

    #[test]
    fn test_clear() {
        let mut input = MultilineInput::new("Joke");
        input.set_value("a\nb");
        assert!(!input.is_empty());

        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_disabled_ignores_edits() {
        let mut input = MultilineInput::new("Joke");
        input.set_value("pun");
        input.set_disabled(true);

        assert!(!input.handle_key(key(KeyCode::Enter)));
        assert_eq!(input.value(), "pun");
    }

    /// Renders into a `width` x `height` buffer and returns the rows inside
    /// the border and horizontal padding.
    fn render_inner(input: &MultilineInput, width: u16, height: u16) -> Vec<String> {
        let styles = StyleSheet::default();
        let spec = styles.get(StyleName::TextArea);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| input.render_with(spec, Color::Cyan, f.area(), f.buffer_mut()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (1..height - 1)
            .map(|y| (2..width - 2).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_long_line_wraps_inside_field() {
        let mut input = MultilineInput::new("Joke");
        input.set_focused(true);
        type_str(&mut input, LONG_JOKE);

        let rows = render_inner(&input, 24, 7);
        assert_eq!(rows[0], "I only know twenty f");
        assert_eq!(rows.concat().trim_end(), LONG_JOKE);
    }

    #[test]
    fn test_scrolls_to_cursor_row() {
        let mut input = MultilineInput::new("Joke");
        input.set_focused(true);
        type_str(&mut input, LONG_JOKE);

        let rows = render_inner(&input, 24, 4);
        assert_eq!(rows.len(), 2);
        assert!(rows[1].contains("ENDMARK"));
        assert!(!rows.concat().contains("I only"));
    }

    #[test]
    fn test_cursor_moves_to_next_row_when_row_is_full() {
        let mut input = MultilineInput::new("Joke");
        input.set_value("abcd\nef");
        input.handle_key(key(KeyCode::Up));
        input.handle_key(key(KeyCode::End));

        let (rows, row, col) = input.display_rows(4);
        assert_eq!(rows, vec!["abcd", "", "ef"]);
        assert_eq!((row, col), (1, 0));

        input.handle_key(key(KeyCode::Left));
        assert_eq!(input.display_rows(4).1, 0);
        assert_eq!(input.display_rows(4).2, 3);
    }

    #[test]
    fn test_soft_wrap_tracks_row_starts() {
        assert_eq!(
            soft_wrap("abcdefg", 3),
            vec![(0, "abc".to_string()), (3, "def".to_string()), (6, "g".to_string())]
        );
        assert_eq!(soft_wrap("", 3), vec![(0, String::new())]);
    }
}

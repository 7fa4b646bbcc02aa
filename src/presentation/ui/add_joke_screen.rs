//! Form for submitting a new joke.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    widgets::{Paragraph, Widget},
};

use super::common::{self, ScreenContext};
use super::fetch_state::RequestId;
use super::utils::inset_vertical;
use crate::application::AddJokeError;
use crate::domain::{Joke, NewJoke};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::StyleName;
use crate::presentation::widgets::{KeyHint, MultilineInput, TextInput};

pub const STATUS_ERROR: &str = "Failed to add joke. Please try again.";
pub const CONNECTION_ERROR: &str = "Failed to add joke. Check your connection.";
pub const SUCCESS_TITLE: &str = "Success!";
pub const SUCCESS_MESSAGE: &str = "Your joke has been added!";

const EDITING_HINTS: &[KeyHint] = &[
    KeyHint::new("Tab", "Next field"),
    KeyHint::new("C-s", "Add joke"),
    KeyHint::new("Esc", "Leave form"),
];
const IDLE_HINTS: &[KeyHint] = &[
    KeyHint::new("Enter", "Edit form"),
    KeyHint::new("q", "Quit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Contributor,
    Joke,
    Submit,
}

impl FormFocus {
    const fn next(self) -> Self {
        match self {
            Self::Contributor => Self::Joke,
            Self::Joke => Self::Submit,
            Self::Submit => Self::Contributor,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Contributor => Self::Submit,
            Self::Joke => Self::Contributor,
            Self::Submit => Self::Joke,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Editing,
    Submitting(RequestId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddJokeAction {
    None,
    Submit,
}

/// What a finished submission did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not the pending submission.
    Ignored,
    Added,
    Failed,
}

pub struct AddJokeScreen {
    contributor: TextInput,
    joke: MultilineInput,
    focus: Option<FormFocus>,
    submit: SubmitState,
    error: Option<String>,
}

impl Default for AddJokeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AddJokeScreen {
    #[must_use]
    pub fn new() -> Self {
        let mut screen = Self {
            contributor: TextInput::new("Contributor").placeholder("Your Name / Username"),
            joke: MultilineInput::new("Joke").placeholder("Enter your joke here..."),
            focus: None,
            submit: SubmitState::Editing,
            error: None,
        };
        screen.set_focus(Some(FormFocus::Contributor));
        screen
    }

    fn set_focus(&mut self, focus: Option<FormFocus>) {
        self.focus = focus;
        self.contributor
            .set_focused(focus == Some(FormFocus::Contributor));
        self.joke.set_focused(focus == Some(FormFocus::Joke));
    }

    fn set_busy(&mut self, busy: bool) {
        self.contributor.set_disabled(busy);
        self.joke.set_disabled(busy);
    }

    #[must_use]
    pub const fn focus(&self) -> Option<FormFocus> {
        self.focus
    }

    #[must_use]
    pub const fn submit_state(&self) -> SubmitState {
        self.submit
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.submit, SubmitState::Submitting(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn contributor(&self) -> &str {
        self.contributor.value()
    }

    #[must_use]
    pub fn joke_text(&self) -> String {
        self.joke.value()
    }

    /// Whether a text field is taking plain character keys.
    #[must_use]
    pub const fn captures_input(&self) -> bool {
        matches!(
            self.focus,
            Some(FormFocus::Contributor | FormFocus::Joke)
        )
    }

    #[must_use]
    pub const fn key_hints(&self) -> &'static [KeyHint] {
        if self.focus.is_some() {
            EDITING_HINTS
        } else {
            IDLE_HINTS
        }
    }

    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            "Adding..."
        } else {
            "Add Joke"
        }
    }

    /// Unused keys return `false` so the caller can treat them as navigation.
    pub fn handle_key(&mut self, key: KeyEvent) -> (bool, AddJokeAction) {
        if EventHandler::is_submit_shortcut(&key) {
            return (true, AddJokeAction::Submit);
        }

        let Some(focus) = self.focus else {
            if EventHandler::is_submit_event(&key) || key.code == KeyCode::Char('i') {
                self.set_focus(Some(FormFocus::Contributor));
                return (true, AddJokeAction::None);
            }
            return (false, AddJokeAction::None);
        };

        match key.code {
            KeyCode::Esc => {
                self.set_focus(None);
                return (true, AddJokeAction::None);
            }
            KeyCode::Tab => {
                self.set_focus(Some(focus.next()));
                return (true, AddJokeAction::None);
            }
            KeyCode::BackTab => {
                self.set_focus(Some(focus.prev()));
                return (true, AddJokeAction::None);
            }
            _ => {}
        }

        match focus {
            FormFocus::Contributor => {
                if key.code == KeyCode::Enter {
                    self.set_focus(Some(FormFocus::Joke));
                    return (true, AddJokeAction::None);
                }
                (self.contributor.handle_key(key), AddJokeAction::None)
            }
            FormFocus::Joke => (self.joke.handle_key(key), AddJokeAction::None),
            FormFocus::Submit => {
                if EventHandler::is_submit_event(&key) && key.modifiers == KeyModifiers::NONE {
                    (true, AddJokeAction::Submit)
                } else {
                    (false, AddJokeAction::None)
                }
            }
        }
    }

    /// Validates the form and enters the busy state.
    ///
    /// Returns the values to post, untrimmed, or `None` when the form is
    /// invalid or a submission is already in flight.
    pub fn begin_submit(&mut self, id: RequestId) -> Option<NewJoke> {
        if self.is_submitting() {
            return None;
        }

        match NewJoke::new(self.contributor.value(), self.joke.value()) {
            Ok(new_joke) => {
                self.error = None;
                self.submit = SubmitState::Submitting(id);
                self.set_busy(true);
                Some(new_joke)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn finish_submit(
        &mut self,
        id: RequestId,
        result: &Result<Joke, AddJokeError>,
    ) -> SubmitOutcome {
        if self.submit != SubmitState::Submitting(id) {
            return SubmitOutcome::Ignored;
        }
        self.submit = SubmitState::Editing;
        self.set_busy(false);

        match result {
            Ok(_) => {
                self.contributor.clear();
                self.joke.clear();
                self.error = None;
                SubmitOutcome::Added
            }
            Err(e) => {
                self.error = Some(submit_error_message(e));
                SubmitOutcome::Failed
            }
        }
    }

    pub fn render(&self, ctx: &ScreenContext<'_>, area: Rect, buf: &mut Buffer) {
        let area = common::container(ctx, area, buf);
        let input = ctx.styles.get(StyleName::Input);
        let text_area = ctx.styles.get(StyleName::TextArea);
        let button = if self.is_submitting() {
            ctx.styles.get(StyleName::ButtonDisabled)
        } else {
            ctx.styles.get(StyleName::Button)
        };

        let error_rows = self
            .error
            .as_deref()
            .map_or(0, |e| common::error_height(ctx, e, area.width));

        let [title_area, error_area, contributor_area, _, joke_area, button_area, _] =
            Layout::vertical([
                Constraint::Length(common::title_height(ctx)),
                Constraint::Length(error_rows),
                Constraint::Length(input.height.unwrap_or(3)),
                Constraint::Length(1),
                Constraint::Length(text_area.height.unwrap_or(7)),
                Constraint::Length(button.height.unwrap_or(3) + 2 * button.margin_y),
                Constraint::Fill(1),
            ])
            .areas(area);

        common::render_title(ctx, "Add a New Joke", title_area, buf);
        if let Some(error) = &self.error {
            common::render_error(ctx, error, error_area, buf);
        }

        self.contributor
            .render_with(input, ctx.theme.accent, contributor_area, buf);
        self.joke
            .render_with(text_area, ctx.theme.accent, joke_area, buf);

        let button_area = inset_vertical(button_area, button.margin_y);
        button.block().render(button_area, buf);

        let label = if self.focus == Some(FormFocus::Submit) && !self.is_submitting() {
            format!("▶ {} ◀", self.button_label())
        } else {
            self.button_label().to_string()
        };
        let mut label_style = ctx.styles.style(StyleName::ButtonText);
        if self.focus == Some(FormFocus::Submit) {
            label_style = label_style.add_modifier(Modifier::UNDERLINED);
        }
        let label_row = Rect::new(
            button_area.x,
            button_area.y + button_area.height / 2,
            button_area.width,
            button_area.height.min(1),
        );
        Paragraph::new(label)
            .style(label_style)
            .alignment(ctx.styles.get(StyleName::ButtonText).alignment)
            .render(label_row, buf);
    }
}

/// User-facing text for a failed submission.
#[must_use]
pub fn submit_error_message(error: &AddJokeError) -> String {
    match error {
        AddJokeError::Invalid(e) => e.to_string(),
        AddJokeError::Api(e) if e.is_status() => STATUS_ERROR.to_string(),
        AddJokeError::Api(_) => CONNECTION_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, ValidationError};
    use crate::presentation::theme::{StyleSheet, Theme};
    use ratatui::{Terminal, backend::TestBackend};
    use test_case::test_case;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(screen: &mut AddJokeScreen, s: &str) {
        for c in s.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn filled(contributor: &str, text: &str) -> AddJokeScreen {
        let mut screen = AddJokeScreen::new();
        type_str(&mut screen, contributor);
        screen.handle_key(key(KeyCode::Tab));
        type_str(&mut screen, text);
        screen
    }

    fn render(screen: &AddJokeScreen) -> String {
        let styles = StyleSheet::default();
        let theme = Theme::default();
        let ctx = ScreenContext {
            styles: &styles,
            theme: &theme,
            tick: 0,
            timestamp_format: "%Y",
        };
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
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

    #[test]
    fn test_submit_passes_values_untrimmed() {
        let mut screen = filled(" Ann ", "Why? ");
        let new_joke = screen.begin_submit(RequestId::new(1)).unwrap();

        assert_eq!(new_joke.contributor(), " Ann ");
        assert_eq!(new_joke.text(), "Why? ");
        assert!(screen.is_submitting());
        assert_eq!(screen.button_label(), "Adding...");
    }

    #[test_case("", "joke" ; "empty contributor")]
    #[test_case("Ann", "" ; "empty joke")]
    #[test_case("   ", "joke" ; "blank contributor")]
    #[test_case("Ann", "  " ; "blank joke")]
    fn test_blank_fields_rejected(contributor: &str, text: &str) {
        let mut screen = filled(contributor, text);

        assert!(screen.begin_submit(RequestId::new(1)).is_none());
        assert_eq!(screen.error(), Some("Please fill in both fields"));
        assert!(!screen.is_submitting());
        assert!(render(&screen).contains("Please fill in both fields"));
    }

    #[test]
    fn test_second_submit_ignored_while_busy() {
        let mut screen = filled("Ann", "pun");
        assert!(screen.begin_submit(RequestId::new(1)).is_some());
        assert!(screen.begin_submit(RequestId::new(2)).is_none());
        assert_eq!(screen.submit_state(), SubmitState::Submitting(RequestId::new(1)));
    }

    #[test]
    fn test_inputs_locked_while_submitting() {
        let mut screen = filled("Ann", "pun");
        screen.begin_submit(RequestId::new(1));
        type_str(&mut screen, "xyz");
        assert_eq!(screen.joke_text(), "pun");
    }

    #[test]
    fn test_success_resets_form() {
        let mut screen = filled("Ann", "pun");
        screen.begin_submit(RequestId::new(1));

        let outcome = screen.finish_submit(RequestId::new(1), &Ok(Joke::new(9, "pun", "Ann", "")));

        assert_eq!(outcome, SubmitOutcome::Added);
        assert_eq!(screen.contributor(), "");
        assert_eq!(screen.joke_text(), "");
        assert!(!screen.is_submitting());
        assert_eq!(screen.button_label(), "Add Joke");
    }

    #[test_case(ApiError::status(400), STATUS_ERROR ; "rejected")]
    #[test_case(ApiError::network("refused"), CONNECTION_ERROR ; "offline")]
    #[test_case(ApiError::decode("bad json"), CONNECTION_ERROR ; "garbled")]
    fn test_failure_keeps_values(error: ApiError, expected: &str) {
        let mut screen = filled("Ann", "pun");
        screen.begin_submit(RequestId::new(1));

        let outcome = screen.finish_submit(RequestId::new(1), &Err(AddJokeError::Api(error)));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(screen.error(), Some(expected));
        assert_eq!(screen.contributor(), "Ann");
        assert_eq!(screen.joke_text(), "pun");
    }

    #[test]
    fn test_stale_result_ignored() {
        let mut screen = filled("Ann", "pun");
        screen.begin_submit(RequestId::new(2));

        let outcome = screen.finish_submit(
            RequestId::new(1),
            &Err(AddJokeError::Invalid(ValidationError::MissingFields)),
        );
        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert!(screen.is_submitting());
    }

    #[test]
    fn test_focus_cycle_and_escape() {
        let mut screen = AddJokeScreen::new();
        assert!(screen.captures_input());

        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.focus(), Some(FormFocus::Submit));
        assert!(!screen.captures_input());
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), (true, AddJokeAction::Submit));

        screen.handle_key(key(KeyCode::Esc));
        assert_eq!(screen.focus(), None);
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), (false, AddJokeAction::None));
    }

    #[test]
    fn test_enter_in_joke_field_adds_newline() {
        let mut screen = filled("Ann", "line one");
        screen.handle_key(key(KeyCode::Enter));
        type_str(&mut screen, "line two");
        assert_eq!(screen.joke_text(), "line one\nline two");
    }

    #[test]
    fn test_ctrl_s_submits_from_field() {
        let mut screen = AddJokeScreen::new();
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(screen.handle_key(ctrl_s), (true, AddJokeAction::Submit));
    }

    #[test]
    fn test_render_placeholders_and_button() {
        let text = render(&AddJokeScreen::new());
        assert!(text.contains("Add a New Joke"));
        assert!(text.contains("Your Name / Username"));
        assert!(text.contains("Enter your joke here..."));
        assert!(text.contains("Add Joke"));
    }

    #[test]
    fn test_long_joke_stays_visible_while_typing() {
        let screen = filled(
            "Ann",
            "I only know twenty five letters of the alphabet because I don't know y. ENDMARK",
        );
        let text = render(&screen);
        assert!(text.contains("I only know twenty five"));
        assert!(text.contains("ENDMARK"));
    }
}

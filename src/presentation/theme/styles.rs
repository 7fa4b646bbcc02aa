use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Padding},
};

use super::Theme;
use super::adapter::ColorConverter;

const TEXT_DARK: Color = Color::Rgb(0x33, 0x33, 0x33);
const TEXT_MUTED: Color = Color::Rgb(0x66, 0x66, 0x66);
const CARD: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
const INPUT_BORDER: Color = Color::Rgb(0xDD, 0xDD, 0xDD);
const DISABLED: Color = Color::Rgb(0xCC, 0xCC, 0xCC);
const ERROR_FG: Color = Color::Rgb(0xD8, 0x00, 0x0C);
const ERROR_BG: Color = Color::Rgb(0xFF, 0xC0, 0xCB);

/// Semantic names shared by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleName {
    Container,
    LoadingContainer,
    TitleText,
    JokeCard,
    JokeText,
    ContributorText,
    PictureContainer,
    Picture,
    Input,
    TextArea,
    Button,
    ButtonDisabled,
    ButtonText,
    ErrorText,
    ListItem,
}

impl StyleName {
    pub const ALL: [Self; 15] = [
        Self::Container,
        Self::LoadingContainer,
        Self::TitleText,
        Self::JokeCard,
        Self::JokeText,
        Self::ContributorText,
        Self::PictureContainer,
        Self::Picture,
        Self::Input,
        Self::TextArea,
        Self::Button,
        Self::ButtonDisabled,
        Self::ButtonText,
        Self::ErrorText,
        Self::ListItem,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::LoadingContainer => "loadingContainer",
            Self::TitleText => "titleText",
            Self::JokeCard => "jokeCard",
            Self::JokeText => "jokeText",
            Self::ContributorText => "contributorText",
            Self::PictureContainer => "pictureContainer",
            Self::Picture => "picture",
            Self::Input => "input",
            Self::TextArea => "textArea",
            Self::Button => "button",
            Self::ButtonDisabled => "buttonDisabled",
            Self::ButtonText => "buttonText",
            Self::ErrorText => "errorText",
            Self::ListItem => "listItem",
        }
    }

    /// Looks a name up by its registry key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.key() == key)
    }
}

/// Visual attributes for one semantic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpec {
    pub style: Style,
    pub padding: Padding,
    /// Blank rows above and below.
    pub margin_y: u16,
    pub alignment: Alignment,
    /// Fixed height in rows, borders included.
    pub height: Option<u16>,
    pub border: Option<BorderType>,
    pub border_style: Style,
}

impl StyleSpec {
    const fn text(style: Style) -> Self {
        Self {
            style,
            padding: Padding::ZERO,
            margin_y: 0,
            alignment: Alignment::Left,
            height: None,
            border: None,
            border_style: Style::new(),
        }
    }

    const fn padded(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    const fn margin(mut self, rows: u16) -> Self {
        self.margin_y = rows;
        self
    }

    const fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    const fn height(mut self, rows: u16) -> Self {
        self.height = Some(rows);
        self
    }

    const fn bordered(mut self, border: BorderType, border_style: Style) -> Self {
        self.border = Some(border);
        self.border_style = border_style;
        self
    }

    /// Block carrying this spec's border, padding and base style.
    #[must_use]
    pub fn block(&self) -> Block<'static> {
        let block = Block::default().style(self.style).padding(self.padding);
        match self.border {
            Some(border_type) => block
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(self.border_style),
            None => block,
        }
    }
}

/// Immutable registry mapping [`StyleName`] to [`StyleSpec`].
#[derive(Debug, Clone)]
pub struct StyleSheet {
    specs: [StyleSpec; 15],
}

impl StyleSheet {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let accent = theme.accent;
        let focus_border = Style::new().fg(accent);
        let card_border = Style::new().fg(ColorConverter::tone(accent, 0.75, 0.3));

        let spec = |name: StyleName| match name {
            StyleName::Container => StyleSpec::text(Style::new()).padded(Padding::horizontal(2)),
            StyleName::LoadingContainer => StyleSpec::text(Style::new().fg(accent))
                .aligned(Alignment::Center),
            StyleName::TitleText => StyleSpec::text(
                Style::new().add_modifier(Modifier::BOLD),
            )
            .aligned(Alignment::Center)
            .margin(1),
            StyleName::JokeCard => StyleSpec::text(Style::new().bg(CARD).fg(TEXT_DARK))
                .padded(Padding::new(2, 2, 1, 1))
                .margin(1)
                .bordered(BorderType::Rounded, card_border),
            StyleName::JokeText => StyleSpec::text(Style::new().fg(TEXT_DARK)),
            StyleName::ContributorText => StyleSpec::text(
                Style::new().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC),
            )
            .aligned(Alignment::Right),
            StyleName::PictureContainer => StyleSpec::text(Style::new())
                .aligned(Alignment::Center)
                .margin(1),
            StyleName::Picture => StyleSpec::text(
                Style::new().fg(accent).add_modifier(Modifier::UNDERLINED),
            )
            .aligned(Alignment::Center)
            .bordered(BorderType::Rounded, Style::new().fg(TEXT_MUTED)),
            StyleName::Input => StyleSpec::text(Style::new())
                .padded(Padding::horizontal(1))
                .height(3)
                .bordered(BorderType::Rounded, Style::new().fg(INPUT_BORDER)),
            StyleName::TextArea => StyleSpec::text(Style::new())
                .padded(Padding::horizontal(1))
                .height(7)
                .bordered(BorderType::Rounded, Style::new().fg(INPUT_BORDER)),
            StyleName::Button => StyleSpec::text(Style::new().bg(accent))
                .aligned(Alignment::Center)
                .height(3)
                .margin(1),
            StyleName::ButtonDisabled => StyleSpec::text(Style::new().bg(DISABLED))
                .aligned(Alignment::Center)
                .height(3)
                .margin(1),
            StyleName::ButtonText => StyleSpec::text(
                Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
            )
            .aligned(Alignment::Center),
            StyleName::ErrorText => StyleSpec::text(Style::new().fg(ERROR_FG).bg(ERROR_BG))
                .aligned(Alignment::Center)
                .padded(Padding::horizontal(1))
                .margin(1),
            StyleName::ListItem => StyleSpec::text(Style::new())
                .padded(Padding::horizontal(1))
                .bordered(BorderType::Plain, focus_border),
        };

        Self {
            specs: StyleName::ALL.map(spec),
        }
    }

    #[must_use]
    pub fn get(&self, name: StyleName) -> &StyleSpec {
        &self.specs[name as usize]
    }

    #[must_use]
    pub fn style(&self, name: StyleName) -> Style {
        self.get(name).style
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves_by_key() {
        for name in StyleName::ALL {
            assert_eq!(StyleName::from_key(name.key()), Some(name));
        }
        assert_eq!(StyleName::from_key("nope"), None);
    }

    #[test]
    fn test_all_is_in_declaration_order() {
        for (index, name) in StyleName::ALL.into_iter().enumerate() {
            assert_eq!(name as usize, index);
        }
    }

    #[test]
    fn test_button_follows_accent() {
        let sheet = StyleSheet::from_theme(&Theme::from_color(Color::Green));
        assert_eq!(sheet.style(StyleName::Button).bg, Some(Color::Green));
        assert_eq!(sheet.style(StyleName::ButtonDisabled).bg, Some(DISABLED));
    }

    #[test]
    fn test_error_text_colors() {
        let sheet = StyleSheet::default();
        let error = sheet.get(StyleName::ErrorText);
        assert_eq!(error.style.fg, Some(ERROR_FG));
        assert_eq!(error.alignment, Alignment::Center);
    }

    #[test]
    fn test_inputs_have_fixed_height() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.get(StyleName::Input).height, Some(3));
        assert_eq!(sheet.get(StyleName::TextArea).height, Some(7));
        assert!(sheet.get(StyleName::JokeText).border.is_none());
    }
}

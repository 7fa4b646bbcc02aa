use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::infrastructure::ScreenArg;

/// The three destinations of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Random,
    AllJokes,
    AddJoke,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Random, Self::AllJokes, Self::AddJoke];

    /// Label in the tab bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::AllJokes => "All Jokes",
            Self::AddJoke => "Add Joke",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Random => "🎲",
            Self::AllJokes => "☰",
            Self::AddJoke => "⊕",
        }
    }

    /// Screen title shown in the header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Random => "Dad Jokes",
            Self::AllJokes => "All Jokes",
            Self::AddJoke => "Add a New Joke",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Random => 0,
            Self::AllJokes => 1,
            Self::AddJoke => 2,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Direct shortcut: `F1`..`F3` always, `1`..`3` only when `digits`.
    #[must_use]
    pub fn from_key(key: &KeyEvent, digits: bool) -> Option<Self> {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }
        match key.code {
            KeyCode::F(n @ 1..=3) => Some(Self::ALL[usize::from(n - 1)]),
            KeyCode::Char(c @ '1'..='3') if digits => {
                Some(Self::ALL[c as usize - '1' as usize])
            }
            _ => None,
        }
    }
}

impl From<ScreenArg> for Tab {
    fn from(screen: ScreenArg) -> Self {
        match screen {
            ScreenArg::Random => Self::Random,
            ScreenArg::Jokes => Self::AllJokes,
            ScreenArg::Add => Self::AddJoke,
        }
    }
}

/// Which tab is active and which have been opened.
#[derive(Debug, Clone, Default)]
pub struct TabLayout {
    active: Tab,
    visited: [bool; 3],
    header_shown: bool,
}

impl TabLayout {
    #[must_use]
    pub const fn new(header_shown: bool) -> Self {
        Self {
            active: Tab::Random,
            visited: [false; 3],
            header_shown,
        }
    }

    #[must_use]
    pub const fn active(&self) -> Tab {
        self.active
    }

    #[must_use]
    pub const fn header_shown(&self) -> bool {
        self.header_shown
    }

    /// Activates `tab`. Returns `true` on its first visit.
    pub fn select(&mut self, tab: Tab) -> bool {
        self.active = tab;
        let first = !self.visited[tab.index()];
        self.visited[tab.index()] = true;
        first
    }

    #[must_use]
    pub const fn visited(&self, tab: Tab) -> bool {
        self.visited[tab.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_cycle() {
        assert_eq!(Tab::Random.next(), Tab::AllJokes);
        assert_eq!(Tab::AddJoke.next(), Tab::Random);
        assert_eq!(Tab::Random.prev(), Tab::AddJoke);
    }

    #[test_case(KeyCode::F(1), true, Some(Tab::Random) ; "f1")]
    #[test_case(KeyCode::F(3), false, Some(Tab::AddJoke) ; "f3 while typing")]
    #[test_case(KeyCode::Char('2'), true, Some(Tab::AllJokes) ; "digit")]
    #[test_case(KeyCode::Char('2'), false, None ; "digit while typing")]
    #[test_case(KeyCode::Char('4'), true, None ; "out of range")]
    #[test_case(KeyCode::F(4), true, None ; "f4")]
    fn test_from_key(code: KeyCode, digits: bool, expected: Option<Tab>) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(Tab::from_key(&key, digits), expected);
    }

    #[test]
    fn test_first_visit_reported_once() {
        let mut layout = TabLayout::new(true);
        assert!(layout.select(Tab::AllJokes));
        assert!(!layout.select(Tab::AllJokes));
        assert_eq!(layout.active(), Tab::AllJokes);
        assert!(!layout.visited(Tab::AddJoke));
    }

    #[test]
    fn test_from_screen_arg() {
        assert_eq!(Tab::from(ScreenArg::Jokes), Tab::AllJokes);
        assert_eq!(Tab::from(ScreenArg::Add), Tab::AddJoke);
    }

    #[test]
    fn test_titles_and_labels() {
        assert_eq!(Tab::Random.title(), "Dad Jokes");
        assert_eq!(Tab::AddJoke.title(), "Add a New Joke");
        assert_eq!(Tab::AllJokes.label(), "All Jokes");
    }
}

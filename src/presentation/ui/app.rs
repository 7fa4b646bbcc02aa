//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame, Terminal,
    backend::TestBackend,
    layout::{Constraint, Layout},
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info, warn};

use super::add_joke_screen::{self, AddJokeAction, AddJokeScreen, SubmitOutcome};
use super::backend::{Action, Backend, BackendCommand, BackendExecutor};
use super::common::ScreenContext;
use super::fetch_state::RequestIds;
use super::jokes_list_screen::{JokesListAction, JokesListScreen};
use super::notification_popup::NotificationPopup;
use super::random_screen::{RandomAction, RandomScreen};
use super::tabs::{Tab, TabLayout};
use crate::application::NotificationManager;
use crate::domain::{JokesPort, NotificationPort};
use crate::infrastructure::{AppConfig, BrowserService, ClipboardService};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::platform::HostEnvironment;
use crate::presentation::theme::{StyleSheet, Theme};
use crate::presentation::widgets::{FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, TabBar};

const TICK_RATE: Duration = Duration::from_millis(100);
const GLOBAL_HINTS: &str = "F1-F3 tabs  C-c quit ";

/// Display settings resolved from config and host.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub header_shown: bool,
    pub accent_color: String,
    pub timestamp_format: String,
    pub notification_duration: Duration,
}

impl AppOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig, host: HostEnvironment) -> Self {
        Self {
            header_shown: config
                .ui
                .show_header
                .unwrap_or_else(|| host.client_only_value(false, true)),
            accent_color: config.theme.accent_color.clone(),
            timestamp_format: config.ui.timestamp_format.clone(),
            notification_duration: config.notification_duration(),
        }
    }
}

pub struct App {
    tabs: TabLayout,
    random: RandomScreen,
    jokes: JokesListScreen,
    add: AddJokeScreen,
    request_ids: RequestIds,
    executor: BackendExecutor,
    backend: Option<Backend>,
    command_tx: mpsc::UnboundedSender<BackendCommand>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    notifications: NotificationManager,
    desktop_notifier: Arc<dyn NotificationPort>,
    clipboard: ClipboardService,
    browser: BrowserService,
    theme: Theme,
    styles: StyleSheet,
    timestamp_format: String,
    tick: usize,
    exiting: bool,
}

impl App {
    #[must_use]
    pub fn new(
        jokes_port: Arc<dyn JokesPort>,
        desktop_notifier: Arc<dyn NotificationPort>,
        options: AppOptions,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let executor = BackendExecutor::new(jokes_port);
        let backend = Backend::new(executor.clone(), command_rx, action_tx.clone());
        let theme = Theme::new(&options.accent_color);

        Self {
            tabs: TabLayout::new(options.header_shown),
            random: RandomScreen::new(),
            jokes: JokesListScreen::new(),
            add: AddJokeScreen::new(),
            request_ids: RequestIds::default(),
            executor,
            backend: Some(backend),
            command_tx,
            action_tx,
            action_rx,
            notifications: NotificationManager::new(options.notification_duration),
            desktop_notifier,
            clipboard: ClipboardService::new(),
            browser: BrowserService::new(),
            styles: StyleSheet::from_theme(&theme),
            theme,
            timestamp_format: options.timestamp_format,
            tick: 0,
            exiting: false,
        }
    }

    /// Spawns the backend worker and opens the first tab.
    fn start(&mut self) -> Option<JoinHandle<()>> {
        let worker = self.backend.take().map(|backend| tokio::spawn(backend.run()));
        self.select_tab(self.tabs.active());
        worker
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let worker = self.start();
        let result = self.run_event_loop(terminal).await;

        let Self { command_tx, .. } = self;
        drop(command_tx);
        if let Some(worker) = worker
            && let Err(e) = worker.await
        {
            warn!(error = %e, "Backend worker did not shut down cleanly");
        }

        info!("Application exiting normally");
        result
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick_interval = interval(TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = tick_interval.tick() => {
                    if self.on_tick() {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                event = terminal_events.next() => {
                    match event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(&event) == EventResult::Exit {
                                self.exiting = true;
                            }
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        Some(Err(e)) => warn!(error = %e, "Terminal event error"),
                        None => self.exiting = true,
                    }
                }
            }
        }

        Ok(())
    }

    /// Renders `tab` once, after its data has loaded, into plain text.
    ///
    /// # Errors
    /// Returns error if the off-screen terminal cannot be drawn.
    pub async fn snapshot(
        mut self,
        tab: Tab,
        width: u16,
        height: u16,
    ) -> color_eyre::Result<String> {
        if let Some(command) = self.open_tab(tab) {
            let action = self.executor.execute(command).await;
            self.handle_action(action);
        }

        let mut terminal = Terminal::new(TestBackend::new(width, height))?;
        terminal.draw(|frame| self.render(frame))?;

        let buffer = terminal.backend().buffer();
        let text = (0..buffer.area.height)
            .map(|y| {
                let row: String = (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect();
                row.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n");
        Ok(text)
    }

    fn on_tick(&mut self) -> bool {
        let busy = self.is_busy();
        if busy {
            self.tick = self.tick.wrapping_add(1);
        }
        self.notifications.tick() || busy
    }

    fn is_busy(&self) -> bool {
        self.random.state().is_busy() || self.jokes.state().is_busy() || self.add.is_submitting()
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_force_quit_event(&key) {
            return EventResult::Exit;
        }

        if let Some(tab) = Tab::from_key(&key, false) {
            self.select_tab(tab);
            return EventResult::Continue;
        }

        if self.handle_screen_key(key) {
            return EventResult::Continue;
        }

        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }
        if let Some(tab) = Tab::from_key(&key, true) {
            self.select_tab(tab);
            return EventResult::Continue;
        }
        match key.code {
            KeyCode::Tab => self.select_tab(self.tabs.active().next()),
            KeyCode::BackTab => self.select_tab(self.tabs.active().prev()),
            KeyCode::Esc if self.notifications.has_notifications() => self.notifications.dismiss(),
            _ => {}
        }
        EventResult::Continue
    }

    /// Returns whether the active screen used the key.
    fn handle_screen_key(&mut self, key: KeyEvent) -> bool {
        match self.tabs.active() {
            Tab::Random => match self.random.handle_key(key) {
                RandomAction::None => false,
                RandomAction::Refresh => {
                    self.refresh(Tab::Random);
                    true
                }
                RandomAction::CopyJoke(text) => {
                    self.copy(text);
                    true
                }
                RandomAction::OpenPicture(url) => {
                    self.browser.open(url);
                    true
                }
            },
            Tab::AllJokes => match self.jokes.handle_key(key) {
                JokesListAction::None => false,
                JokesListAction::Refresh => {
                    self.refresh(Tab::AllJokes);
                    true
                }
                JokesListAction::CopyJoke(text) => {
                    self.copy(text);
                    true
                }
            },
            Tab::AddJoke => {
                let (consumed, action) = self.add.handle_key(key);
                if action == AddJokeAction::Submit {
                    self.submit_joke();
                }
                consumed
            }
        }
    }

    /// Copies in the background; the outcome arrives as [`Action::Copied`].
    fn copy(&self, text: String) {
        let clipboard = self.clipboard.clone();
        let action_tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = clipboard.set_text(text).await;
            if action_tx.send(Action::Copied { result }).is_err() {
                debug!("App closed before the clipboard result arrived");
            }
        });
    }

    fn select_tab(&mut self, tab: Tab) {
        if let Some(command) = self.open_tab(tab) {
            self.send(command);
        }
    }

    /// Activates `tab`; on its first visit starts its load and returns the command.
    fn open_tab(&mut self, tab: Tab) -> Option<BackendCommand> {
        debug!(?tab, "Switching tab");
        if !self.tabs.select(tab) {
            return None;
        }

        let id = self.request_ids.next_id();
        match tab {
            Tab::Random => {
                self.random.begin_load(id);
                Some(BackendCommand::LoadRandom { id })
            }
            Tab::AllJokes => {
                self.jokes.begin_load(id);
                Some(BackendCommand::LoadJokes { id })
            }
            Tab::AddJoke => None,
        }
    }

    fn refresh(&mut self, tab: Tab) {
        let id = self.request_ids.next_id();
        let started = match tab {
            Tab::Random => self
                .random
                .begin_refresh(id)
                .then_some(BackendCommand::LoadRandom { id }),
            Tab::AllJokes => self
                .jokes
                .begin_refresh(id)
                .then_some(BackendCommand::LoadJokes { id }),
            Tab::AddJoke => None,
        };

        match started {
            Some(command) => self.send(command),
            None => debug!(?tab, "Refresh ignored, request already pending"),
        }
    }

    fn submit_joke(&mut self) {
        let id = self.request_ids.next_id();
        if let Some(joke) = self.add.begin_submit(id) {
            self.send(BackendCommand::AddJoke { id, joke });
        }
    }

    fn send(&self, command: BackendCommand) {
        if self.command_tx.send(command).is_err() {
            warn!("Backend worker is not running");
        }
    }

    fn handle_action(&mut self, action: Action) {
        let applied = match action {
            Action::RandomLoaded { id, result } => self.random.apply(id, result),
            Action::JokesLoaded { id, result } => self.jokes.apply(id, result),
            Action::JokeAdded { id, result } => match self.add.finish_submit(id, &result) {
                SubmitOutcome::Added => {
                    self.notifications.success(
                        add_joke_screen::SUCCESS_TITLE,
                        add_joke_screen::SUCCESS_MESSAGE,
                    );
                    self.desktop_notifier
                        .send(add_joke_screen::SUCCESS_TITLE, add_joke_screen::SUCCESS_MESSAGE);
                    true
                }
                SubmitOutcome::Failed => true,
                SubmitOutcome::Ignored => false,
            },
            Action::Copied { result: Ok(()) } => {
                self.notifications.info("Copied", "Joke copied to clipboard");
                true
            }
            Action::Copied { result: Err(e) } => {
                warn!(error = %e, "Clipboard copy failed");
                self.notifications.error("Copy failed", "Could not access the clipboard");
                true
            }
        };

        if !applied {
            debug!("Dropped stale result");
        }
    }

    fn render(&self, frame: &mut Frame) {
        let header_rows = u16::from(self.tabs.header_shown());
        let [header_area, body_area, tabs_area, footer_area] = Layout::vertical([
            Constraint::Length(header_rows),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let active = self.tabs.active();

        if self.tabs.header_shown() {
            frame.render_widget(
                HeaderBar::new(crate::NAME, crate::VERSION)
                    .title(active.title())
                    .busy(self.is_busy())
                    .style(HeaderBarStyle::from_theme(&self.theme)),
                header_area,
            );
        }

        let ctx = ScreenContext {
            styles: &self.styles,
            theme: &self.theme,
            tick: self.tick,
            timestamp_format: &self.timestamp_format,
        };
        let buf = frame.buffer_mut();
        match active {
            Tab::Random => self.random.render(&ctx, body_area, buf),
            Tab::AllJokes => self.jokes.render(&ctx, body_area, buf),
            Tab::AddJoke => self.add.render(&ctx, body_area, buf),
        }

        frame.render_widget(
            TabBar::new(Tab::ALL.map(|t| (t.icon(), t.label())), active.index()).theme(&self.theme),
            tabs_area,
        );

        let hints = match active {
            Tab::Random => self.random.key_hints(),
            Tab::AllJokes => self.jokes.key_hints(),
            Tab::AddJoke => self.add.key_hints(),
        };
        frame.render_widget(
            FooterBar::new(hints)
                .context(active.label())
                .right_info(Some(GLOBAL_HINTS))
                .style(FooterBarStyle::from_theme(&self.theme)),
            footer_area,
        );

        if let Some(notification) = self.notifications.current_notification() {
            frame.render_widget(NotificationPopup::new(notification, &self.theme), frame.area());
        }
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinSet};
use tracing::{debug, info, warn};

use super::fetch_state::RequestId;
use super::tabs::Tab;
use crate::application::{
    AddJokeError, AddJokeUseCase, ListJokesUseCase, LoadRandomUseCase, RandomContent,
};
use crate::domain::entities::NewJoke;
use crate::domain::{ApiError, Joke, JokesPort};
use crate::infrastructure::ClipboardError;

#[derive(Debug)]
pub enum Action {
    RandomLoaded {
        id: RequestId,
        result: Result<RandomContent, ApiError>,
    },
    JokesLoaded {
        id: RequestId,
        result: Result<Vec<Joke>, ApiError>,
    },
    JokeAdded {
        id: RequestId,
        result: Result<Joke, AddJokeError>,
    },
    Copied {
        result: Result<(), ClipboardError>,
    },
}

#[derive(Debug, Clone)]
pub enum BackendCommand {
    LoadRandom { id: RequestId },
    LoadJokes { id: RequestId },
    AddJoke { id: RequestId, joke: NewJoke },
}

impl BackendCommand {
    /// Screen whose request this is.
    #[must_use]
    pub const fn screen(&self) -> Tab {
        match self {
            Self::LoadRandom { .. } => Tab::Random,
            Self::LoadJokes { .. } => Tab::AllJokes,
            Self::AddJoke { .. } => Tab::AddJoke,
        }
    }

    #[must_use]
    pub const fn id(&self) -> RequestId {
        match self {
            Self::LoadRandom { id } | Self::LoadJokes { id } | Self::AddJoke { id, .. } => *id,
        }
    }
}

/// Runs one command to completion.
#[derive(Clone)]
pub struct BackendExecutor {
    load_random: LoadRandomUseCase,
    list_jokes: ListJokesUseCase,
    add_joke: AddJokeUseCase,
}

impl BackendExecutor {
    #[must_use]
    pub fn new(jokes_port: Arc<dyn JokesPort>) -> Self {
        Self {
            load_random: LoadRandomUseCase::new(Arc::clone(&jokes_port)),
            list_jokes: ListJokesUseCase::new(Arc::clone(&jokes_port)),
            add_joke: AddJokeUseCase::new(jokes_port),
        }
    }

    pub async fn execute(&self, command: BackendCommand) -> Action {
        match command {
            BackendCommand::LoadRandom { id } => {
                let result = self.load_random.execute().await;
                Action::RandomLoaded { id, result }
            }
            BackendCommand::LoadJokes { id } => {
                let result = self.list_jokes.execute().await;
                Action::JokesLoaded { id, result }
            }
            BackendCommand::AddJoke { id, joke } => {
                let result = self
                    .add_joke
                    .execute(joke.contributor(), joke.text())
                    .await;
                Action::JokeAdded { id, result }
            }
        }
    }
}

/// Worker that runs each command in its own task.
///
/// At most one request per screen is in flight: a new command for a screen
/// aborts that screen's previous task. Everything still running is aborted
/// when the command channel closes.
pub struct Backend {
    executor: BackendExecutor,
    command_rx: mpsc::UnboundedReceiver<BackendCommand>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Backend {
    pub fn new(
        executor: BackendExecutor,
        command_rx: mpsc::UnboundedReceiver<BackendCommand>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            executor,
            command_rx,
            action_tx,
        }
    }

    pub async fn run(mut self) {
        info!("Backend worker started");
        let mut tasks = JoinSet::new();
        let mut in_flight: HashMap<Tab, AbortHandle> = HashMap::new();

        loop {
            tokio::select! {
                command = self.command_rx.recv() => {
                    let Some(command) = command else { break };
                    let screen = command.screen();
                    debug!(?screen, id = %command.id(), "Dispatching request");

                    if let Some(previous) = in_flight.remove(&screen) {
                        debug!(?screen, "Aborting superseded request");
                        previous.abort();
                    }

                    let executor = self.executor.clone();
                    let action_tx = self.action_tx.clone();
                    let handle = tasks.spawn(async move {
                        let action = executor.execute(command).await;
                        if action_tx.send(action).is_err() {
                            debug!("UI gone before request finished");
                        }
                    });
                    in_flight.insert(screen, handle);
                }
                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    if let Err(e) = joined
                        && !e.is_cancelled()
                    {
                        warn!(error = %e, "Request task failed");
                    }
                    in_flight.retain(|_, handle| !handle.is_finished());
                }
            }
        }

        tasks.abort_all();
        info!(aborted = tasks.len(), "Backend worker stopped");
    }
}

//! Loading state shared by the data screens.

use std::fmt;

/// Identifies one request issued by a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out increasing request ids.
#[derive(Debug, Default)]
pub struct RequestIds {
    next: u64,
}

impl RequestIds {
    pub fn next_id(&mut self) -> RequestId {
        self.next += 1;
        RequestId(self.next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// First load; nothing to show yet.
    Loading,
    /// Reload with the previous content still visible.
    Refreshing,
    #[default]
    Idle,
}

/// Data, error and in-flight request of one screen.
#[derive(Debug, Clone)]
pub struct FetchState<T> {
    data: Option<T>,
    error: Option<String>,
    phase: FetchPhase,
    pending: Option<RequestId>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            phase: FetchPhase::Idle,
            pending: None,
        }
    }
}

impl<T> FetchState<T> {
    /// Starts a load, replacing any pending one.
    pub fn begin_load(&mut self, id: RequestId) {
        self.phase = FetchPhase::Loading;
        self.pending = Some(id);
    }

    /// Starts a refresh. Refused while a request is pending.
    pub fn begin_refresh(&mut self, id: RequestId) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.phase = FetchPhase::Refreshing;
        self.pending = Some(id);
        true
    }

    /// Applies a result. Returns `false` when `id` is not the pending request.
    pub fn resolve(&mut self, id: RequestId, result: Result<T, String>) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;
        self.phase = FetchPhase::Idle;

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn phase(&self) -> FetchPhase {
        self.phase
    }

    #[must_use]
    pub const fn pending(&self) -> Option<RequestId> {
        self.pending
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading)
    }

    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        matches!(self.phase, FetchPhase::Refreshing)
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.pending.is_some()
    }
}

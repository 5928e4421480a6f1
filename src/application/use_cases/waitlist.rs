use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicU64, Ordering},
};

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument};

use crate::{
    app_error::FetchResult, application::stats::WaitlistStats,
    domain::entities::waitlist_entry::WaitlistEntry,
};

/// Shared, immutable snapshot of a fetch result. Replaced wholesale, never edited.
pub type Entries = Arc<[WaitlistEntry]>;

#[async_trait]
pub trait WaitlistSource: Send + Sync {
    /// Lists every signup in server order. A missing or null `data` field is
    /// an empty list, not an error.
    async fn list_entries(&self) -> FetchResult<Vec<WaitlistEntry>>;
}

/// Lifecycle of the waitlist resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing requested yet.
    Idle,
    /// A fetch is in flight. `previous` is what a failure falls back to.
    Loading { previous: Entries },
    Loaded { entries: Entries },
    Failed { entries_kept: Entries, message: String },
}

impl FetchState {
    pub fn entries(&self) -> &[WaitlistEntry] {
        match self {
            FetchState::Idle => &[],
            FetchState::Loading { previous } => &previous[..],
            FetchState::Loaded { entries } => &entries[..],
            FetchState::Failed { entries_kept, .. } => &entries_kept[..],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn stats(&self) -> WaitlistStats {
        WaitlistStats::from_entries(self.entries())
    }

    fn snapshot(&self) -> Entries {
        match self {
            FetchState::Idle => Arc::from(Vec::new()),
            FetchState::Loading { previous } => previous.clone(),
            FetchState::Loaded { entries } => entries.clone(),
            FetchState::Failed { entries_kept, .. } => entries_kept.clone(),
        }
    }
}

/// What happened to one `fetch_waitlist` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded { count: usize },
    Failed { message: String },
    /// A newer fetch was started before this one finished; its result was dropped.
    Superseded,
}

/// Owns the loading/error/data lifecycle of the waitlist listing.
///
/// Every call to `fetch_waitlist` takes a new request id. Only the completion
/// carrying the latest id is applied, so overlapping refreshes settle on the
/// most recently triggered one regardless of which response lands first.
pub struct WaitlistController {
    source: Arc<dyn WaitlistSource>,
    state: watch::Sender<FetchState>,
    latest_request: AtomicU64,
    mounted: AtomicBool,
}

impl WaitlistController {
    pub fn new(source: Arc<dyn WaitlistSource>) -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            source,
            state,
            latest_request: AtomicU64::new(0),
            mounted: AtomicBool::new(false),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    pub fn stats(&self) -> WaitlistStats {
        self.state.borrow().stats()
    }

    /// Issues the automatic first fetch. Only the first call does anything.
    pub async fn mount(&self) -> Option<FetchOutcome> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            debug!("Waitlist controller already mounted");
            return None;
        }
        Some(self.fetch_waitlist().await)
    }

    #[instrument(skip(self))]
    pub async fn fetch_waitlist(&self) -> FetchOutcome {
        let mut request_id = 0;
        self.state.send_modify(|state| {
            // Bumped under the channel lock so ids and transitions stay ordered.
            request_id = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
            *state = FetchState::Loading {
                previous: state.snapshot(),
            };
        });
        debug!(request_id, "Fetching waitlist");

        let result = self.source.list_entries().await;

        let mut outcome = FetchOutcome::Superseded;
        self.state.send_if_modified(|state| {
            if self.latest_request.load(Ordering::SeqCst) != request_id {
                return false;
            }

            match &result {
                Ok(entries) => {
                    outcome = FetchOutcome::Loaded {
                        count: entries.len(),
                    };
                    *state = FetchState::Loaded {
                        entries: Arc::from(entries.as_slice()),
                    };
                }
                Err(err) => {
                    outcome = FetchOutcome::Failed {
                        message: err.user_message(),
                    };
                    *state = FetchState::Failed {
                        entries_kept: state.snapshot(),
                        message: err.user_message(),
                    };
                }
            }
            true
        });

        match (&outcome, &result) {
            (FetchOutcome::Loaded { count }, _) => {
                info!(request_id, count, "Waitlist loaded");
            }
            (FetchOutcome::Failed { .. }, Err(err)) => {
                error!(
                    request_id,
                    code = err.code().as_str(),
                    error = %err,
                    "Failed to fetch waitlist"
                );
            }
            _ => {
                debug!(request_id, "Discarding stale waitlist response");
            }
        }

        outcome
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::client::ScoresApi;
use crate::error::AppError;
use crate::model::{EventConfig, ScoreEdit, ScoreTable};
use crate::score::Leaderboard;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub table: ScoreTable,
    /// Timestamp as sent by the remote, passed through untouched.
    pub last_updated: Option<String>,
    /// Our clock at the last successful fetch.
    pub refreshed_at: Option<DateTime<Utc>>,
    pub connected: bool,
    /// True while any fetch is in flight, including overlapping ones.
    pub refreshing: bool,
}

/// Pause between a saved edit and the refresh that confirms it.
pub const REFRESH_AFTER_SAVE: Duration = Duration::from_millis(500);

/// Counts one fetch as in flight until dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The remote accepted the edit.
    Saved,
    /// Applied locally only; the next successful refresh decides what sticks.
    LocalOnly(String),
}

/// Holds the current score table and connection state for the event.
#[derive(Clone)]
pub struct ScoreStore {
    event: Arc<EventConfig>,
    state: Arc<RwLock<StoreSnapshot>>,
    refreshes_in_flight: Arc<AtomicUsize>,
    clock: Arc<dyn Clock>,
    refresh_after_save: Duration,
}

impl ScoreStore {
    #[must_use]
    pub fn new(event: EventConfig) -> Self {
        Self::with_clock(event, Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(event: EventConfig, clock: Arc<dyn Clock>) -> Self {
        let snapshot = StoreSnapshot {
            table: ScoreTable::seeded(&event.roster),
            last_updated: None,
            refreshed_at: None,
            connected: true,
            refreshing: false,
        };
        Self {
            event: Arc::new(event),
            state: Arc::new(RwLock::new(snapshot)),
            refreshes_in_flight: Arc::new(AtomicUsize::new(0)),
            clock,
            refresh_after_save: REFRESH_AFTER_SAVE,
        }
    }

    #[must_use]
    pub fn with_refresh_after_save(mut self, delay: Duration) -> Self {
        self.refresh_after_save = delay;
        self
    }

    #[must_use]
    pub fn event(&self) -> &EventConfig {
        &self.event
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let mut snapshot = self.state.read().await.clone();
        snapshot.refreshing = self.refreshes_in_flight.load(Ordering::SeqCst) > 0;
        snapshot
    }

    pub async fn leaderboard(&self) -> Leaderboard {
        let snapshot = self.snapshot().await;
        Leaderboard::build(&self.event.course, &self.event.roster, &snapshot.table)
    }

    /// Replaces the table with the remote's. On failure the old table stays and
    /// the store is marked disconnected.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the fetch fails or the body cannot be decoded
    pub async fn refresh(&self, api: &dyn ScoresApi) -> Result<(), AppError> {
        let result = {
            let _in_flight = InFlight::start(&self.refreshes_in_flight);
            api.fetch_scores().await
        };

        let mut state = self.state.write().await;
        match result {
            Ok(resp) => {
                state.table = resp.scores.conform_to(&self.event.roster);
                state.last_updated = resp.last_updated;
                state.refreshed_at = Some(self.clock.now());
                if !state.connected {
                    info!(api = api.name(), "reconnected to score source");
                }
                state.connected = true;
                debug!(api = api.name(), "score table refreshed");
                Ok(())
            }
            Err(e) => {
                warn!(api = api.name(), error = %e, "score refresh failed");
                state.connected = false;
                Err(e)
            }
        }
    }

    /// Patches the local table without talking to the remote.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the edit does not fit the roster or course
    pub async fn apply_edit(&self, edit: &ScoreEdit) -> Result<(), AppError> {
        edit.validate(&self.event.roster)?;
        self.state.write().await.table.apply(edit)
    }

    /// Applies the edit locally first, then sends it. A failed send is logged and
    /// leaves the local edit in place.
    ///
    /// # Errors
    ///
    /// Will return `Err` only if the edit itself is invalid
    pub async fn submit_edit(
        &self,
        api: &dyn ScoresApi,
        edit: ScoreEdit,
    ) -> Result<EditOutcome, AppError> {
        self.apply_edit(&edit).await?;

        match api.update_score(&edit).await {
            Ok(_) => {
                self.state.write().await.connected = true;
                tokio::time::sleep(self.refresh_after_save).await;
                if let Err(e) = self.refresh(api).await {
                    debug!(error = %e, "refresh after saved edit failed");
                }
                Ok(EditOutcome::Saved)
            }
            Err(e) => {
                warn!(
                    api = api.name(),
                    pairing = edit.pairing_id,
                    round = %edit.round,
                    hole = edit.hole_index + 1,
                    error = %e,
                    "score update failed, keeping local edit"
                );
                self.state.write().await.connected = false;
                Ok(EditOutcome::LocalOnly(e.to_string()))
            }
        }
    }
}

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::client::ScoresApi;
use super::store::ScoreStore;

/// Owns the periodic refresh task. Dropping the handle cancels the task;
/// `shutdown` also waits for it to finish.
#[derive(Debug)]
pub struct RefreshHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "score refresh task ended abnormally");
            }
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Refreshes the store right away, then every `period`, until cancelled.
/// Fetch failures are left to the store to record; the next tick is the retry.
pub fn spawn_refresh_task(
    store: ScoreStore,
    api: Arc<dyn ScoresApi>,
    period: Duration,
) -> RefreshHandle {
    let token = CancellationToken::new();
    let cancelled = token.clone();
    let period = period.max(Duration::from_millis(1));

    let task = tokio::spawn(async move {
        info!(api = api.name(), ?period, "score refresh task started");
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                () = cancelled.cancelled() => break,
                _ = interval.tick() => {
                    if let Err(e) = store.refresh(api.as_ref()).await {
                        debug!(error = %e, "scheduled refresh failed");
                    }
                }
            }
        }
        info!("score refresh task stopped");
    });

    RefreshHandle {
        token,
        task: Some(task),
    }
}

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

use forescore::AppError;
use forescore::controller::client::{ScoresApi, ScoresResponse, UpdateResponse, UpdatedScore};
use forescore::controller::store::{Clock, ScoreStore};
use forescore::model::{
    Course, EventConfig, HOLES, PairingScores, RoundKey, RoundScores, ScoreEdit, ScoreTable,
};

pub const REMOTE_TIMESTAMP: &str = "2025-06-14T18:30:00Z";

/// In-memory stand-in for the remote scores endpoint.
#[derive(Default)]
pub struct FakeApi {
    pub table: Mutex<ScoreTable>,
    pub fail_fetch: AtomicBool,
    pub fail_update: AtomicBool,
    pub fetches: AtomicUsize,
    pub updates: Mutex<Vec<ScoreEdit>>,
    /// When set, each fetch waits for a permit before answering.
    pub gate: Option<Arc<Semaphore>>,
}

impl FakeApi {
    pub fn with_table(table: ScoreTable) -> Arc<Self> {
        Arc::new(Self {
            table: Mutex::new(table),
            ..Self::default()
        })
    }

    pub fn seeded(event: &EventConfig) -> Arc<Self> {
        Self::with_table(ScoreTable::seeded(&event.roster))
    }

    /// A seeded api whose fetches hang until the returned semaphore gets permits.
    pub fn gated(event: &EventConfig) -> (Arc<Self>, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let api = Arc::new(Self {
            table: Mutex::new(ScoreTable::seeded(&event.roster)),
            gate: Some(Arc::clone(&gate)),
            ..Self::default()
        });
        (api, gate)
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_update(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn recorded_updates(&self) -> Vec<ScoreEdit> {
        self.updates.lock().unwrap().clone()
    }

    pub fn set_table(&self, table: ScoreTable) {
        *self.table.lock().unwrap() = table;
    }
}

#[async_trait]
impl ScoresApi for FakeApi {
    async fn fetch_scores(&self) -> Result<ScoresResponse, AppError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(AppError::Network("connection refused".into()));
        }
        Ok(ScoresResponse {
            scores: self.table.lock().unwrap().clone(),
            last_updated: Some(REMOTE_TIMESTAMP.to_string()),
        })
    }

    async fn update_score(&self, edit: &ScoreEdit) -> Result<UpdateResponse, AppError> {
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(AppError::Rejected("scoreboard is locked".into()));
        }
        self.updates.lock().unwrap().push(*edit);
        self.table.lock().unwrap().apply(edit)?;
        Ok(UpdateResponse {
            success: true,
            message: Some("Score updated".into()),
            updated_score: Some(UpdatedScore {
                round: edit.round,
                hole_index: edit.hole_index,
                score: edit.score,
            }),
            timestamp: Some(REMOTE_TIMESTAMP.to_string()),
            ..UpdateResponse::default()
        })
    }

    fn name(&self) -> &str {
        "fake"
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 14, 12, 0, 0).unwrap()
}

pub fn store_at(event: EventConfig, now: DateTime<Utc>) -> ScoreStore {
    ScoreStore::with_clock(event, Arc::new(FixedClock(now)))
}

/// A round with the given strokes on the first holes and the rest unplayed.
pub fn round_of(strokes: &[i32]) -> RoundScores {
    let mut slots = [None; HOLES];
    for (slot, &s) in slots.iter_mut().zip(strokes) {
        *slot = Some(s);
    }
    RoundScores::new(slots)
}

/// Par on every hole.
pub fn par_round(course: &Course) -> RoundScores {
    round_of(course.pars())
}

/// Par on every hole, plus `over` strokes on the first hole.
pub fn round_over_par(course: &Course, over: i32) -> RoundScores {
    let mut strokes = *course.pars();
    strokes[0] += over;
    round_of(&strokes)
}

pub fn pairing_scores(round1: RoundScores, round2: RoundScores) -> PairingScores {
    PairingScores { round1, round2 }
}

/// Both rounds complete for every pairing, all at par.
pub fn finished_table(event: &EventConfig) -> ScoreTable {
    let mut table = ScoreTable::seeded(&event.roster);
    for (_, pairing) in event.roster.pairings() {
        table.insert(
            pairing.id,
            pairing_scores(par_round(&event.course), par_round(&event.course)),
        );
    }
    table
}

pub fn edit(pairing_id: i64, round: RoundKey, hole_index: usize, score: i32) -> ScoreEdit {
    ScoreEdit::record(pairing_id, round, hole_index, score)
}

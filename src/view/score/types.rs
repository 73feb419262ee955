use crate::controller::store::StoreSnapshot;
use crate::model::{PairingId, RoundKey, time_since};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub connected: bool,
    pub refreshing: bool,
    /// e.g. `2 minutes`; `None` before the first successful fetch.
    pub last_refresh: Option<String>,
}

impl ConnectionStatus {
    #[must_use]
    pub fn from_snapshot(snapshot: &StoreSnapshot, now: DateTime<Utc>) -> Self {
        Self {
            connected: snapshot.connected,
            refreshing: snapshot.refreshing,
            last_refresh: snapshot.refreshed_at.map(|then| time_since(then, now)),
        }
    }
}

/// Where the scorecard and picker post back to and link between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleTarget {
    pub pairing_id: PairingId,
    pub round: RoundKey,
    pub hole_index: usize,
}

impl HoleTarget {
    #[must_use]
    pub fn picker_url(&self) -> String {
        format!(
            "picker?pairing={}&round={}&hole={}",
            self.pairing_id, self.round, self.hole_index
        )
    }
}

#[must_use]
pub fn scorecard_url(pairing_id: PairingId, round: RoundKey) -> String {
    format!("scorecard?pairing={pairing_id}&round={round}")
}

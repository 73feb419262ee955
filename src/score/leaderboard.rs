use serde::Serialize;

use super::pairing::PairingSummary;
use super::team::{TeamSummary, best_team, worst_team};
use crate::model::{Course, PairingId, PairingScores, Roster, ScoreTable};

/// Leader and trailer are only marked once some pairing has played this many holes.
pub const MIN_HOLES_FOR_STANDINGS: usize = 2;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RankedPairing {
    /// Zero-based place after sorting.
    pub position: usize,
    pub is_leader: bool,
    pub is_trailer: bool,
    pub summary: PairingSummary,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    pub teams: Vec<TeamSummary>,
    pub pairings: Vec<RankedPairing>,
    pub best_team: Option<String>,
    pub worst_team: Option<String>,
    pub both_sides_complete: bool,
}

impl Leaderboard {
    /// Aggregates one snapshot of the table. Pure: the same inputs always give the same board.
    #[must_use]
    pub fn build(course: &Course, roster: &Roster, table: &ScoreTable) -> Self {
        let empty = PairingScores::default();
        let summaries: Vec<PairingSummary> = roster
            .pairings()
            .map(|(team, pairing)| {
                let scores = table.pairing(pairing.id).unwrap_or(&empty);
                PairingSummary::new(team, pairing, scores, course)
            })
            .collect();

        let teams: Vec<TeamSummary> = roster
            .teams()
            .iter()
            .map(|team| {
                TeamSummary::from_pairings(
                    &team.name,
                    summaries.iter().filter(|summary| summary.team == team.name),
                )
            })
            .collect();

        let both_sides_complete = summaries
            .iter()
            .all(|summary| summary.total_holes_remaining == 0);

        let best_team = best_team(&teams).map(|team| team.name.clone());
        let worst_team = worst_team(&teams).map(|team| team.name.clone());

        Self {
            pairings: rank_pairings(summaries),
            teams,
            best_team,
            worst_team,
            both_sides_complete,
        }
    }

    #[must_use]
    pub fn team(&self, name: &str) -> Option<&TeamSummary> {
        self.teams.iter().find(|team| team.name == name)
    }

    #[must_use]
    pub fn pairing(&self, id: PairingId) -> Option<&RankedPairing> {
        self.pairings
            .iter()
            .find(|ranked| ranked.summary.pairing_id == id)
    }
}

/// Sorts ascending by combined score to par. The sort is stable, so ties keep input order.
#[must_use]
pub fn rank_pairings(mut summaries: Vec<PairingSummary>) -> Vec<RankedPairing> {
    summaries.sort_by_key(|summary| summary.score_to_par);

    let show_standings = summaries
        .iter()
        .any(|summary| summary.holes_played >= MIN_HOLES_FOR_STANDINGS);
    let last = summaries.len().saturating_sub(1);

    summaries
        .into_iter()
        .enumerate()
        .map(|(position, summary)| RankedPairing {
            position,
            is_leader: show_standings && position == 0,
            is_trailer: show_standings && position == last,
            summary,
        })
        .collect()
}

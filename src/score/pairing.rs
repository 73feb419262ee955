use serde::Serialize;

use super::round::RoundSummary;
use crate::model::{Course, Pairing, PairingId, PairingScores, RoundKey, Team};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PairingSummary {
    pub pairing_id: PairingId,
    pub label: String,
    pub team: String,
    pub round1: RoundSummary,
    pub round2: RoundSummary,
    /// Both rounds added; a round with nothing recorded adds 0.
    pub total_score: i32,
    pub total_par_for_completed_holes: i32,
    pub total_holes_remaining: usize,
    pub holes_played: usize,
    pub complete: bool,
    pub has_scores: bool,
    pub score_to_par: i32,
}

impl PairingSummary {
    #[must_use]
    pub fn new(team: &Team, pairing: &Pairing, scores: &PairingScores, course: &Course) -> Self {
        let round1 = RoundSummary::for_round(&scores.round1, course);
        let round2 = RoundSummary::for_round(&scores.round2, course);

        let total_score = round1
            .total
            .unwrap_or(0)
            .saturating_add(round2.total.unwrap_or(0));
        let total_par_for_completed_holes = round1
            .par_for_completed_holes
            .saturating_add(round2.par_for_completed_holes);

        Self {
            pairing_id: pairing.id,
            label: pairing.label.clone(),
            team: team.name.clone(),
            round1,
            round2,
            total_score,
            total_par_for_completed_holes,
            total_holes_remaining: round1.holes_remaining + round2.holes_remaining,
            holes_played: round1.holes_played + round2.holes_played,
            complete: round1.complete && round2.complete,
            has_scores: round1.is_started() || round2.is_started(),
            score_to_par: total_score.saturating_sub(total_par_for_completed_holes),
        }
    }

    #[must_use]
    pub fn round(&self, key: RoundKey) -> &RoundSummary {
        match key {
            RoundKey::Round1 => &self.round1,
            RoundKey::Round2 => &self.round2,
        }
    }
}

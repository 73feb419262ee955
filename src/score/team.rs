use serde::Serialize;

use super::pairing::PairingSummary;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TeamSummary {
    pub name: String,
    pub total_score: i32,
    pub total_par_for_completed_holes: i32,
    pub total_holes_remaining: usize,
    pub has_scores: bool,
    /// Zero until the team has any score recorded.
    pub score_to_par: i32,
}

impl TeamSummary {
    #[must_use]
    pub fn from_pairings<'a>(
        name: &str,
        pairings: impl IntoIterator<Item = &'a PairingSummary>,
    ) -> Self {
        let mut summary = Self {
            name: name.to_string(),
            total_score: 0,
            total_par_for_completed_holes: 0,
            total_holes_remaining: 0,
            has_scores: false,
            score_to_par: 0,
        };

        for pairing in pairings {
            summary.total_score = summary.total_score.saturating_add(pairing.total_score);
            summary.total_par_for_completed_holes = summary
                .total_par_for_completed_holes
                .saturating_add(pairing.total_par_for_completed_holes);
            summary.total_holes_remaining += pairing.total_holes_remaining;
            summary.has_scores |= pairing.has_scores;
        }

        if summary.has_scores {
            summary.score_to_par = summary
                .total_score
                .saturating_sub(summary.total_par_for_completed_holes);
        }
        summary
    }
}

/// Lowest score to par among teams with scores; the earlier team wins a tie.
#[must_use]
pub fn best_team(teams: &[TeamSummary]) -> Option<&TeamSummary> {
    teams
        .iter()
        .filter(|team| team.has_scores)
        .reduce(|best, team| {
            if team.score_to_par < best.score_to_par {
                team
            } else {
                best
            }
        })
}

/// Highest score to par among teams with scores; the earlier team wins a tie.
#[must_use]
pub fn worst_team(teams: &[TeamSummary]) -> Option<&TeamSummary> {
    teams
        .iter()
        .filter(|team| team.has_scores)
        .reduce(|worst, team| {
            if team.score_to_par > worst.score_to_par {
                team
            } else {
                worst
            }
        })
}

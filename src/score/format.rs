use std::cmp::Ordering;

use super::pairing::PairingSummary;
use super::round::RoundSummary;
use super::team::TeamSummary;

pub const ENTER_PROMPT: &str = "Enter";
pub const NO_SCORE: &str = "-";
pub const EVEN: &str = "EVEN";

/// `EVEN` for zero, `+3` above par, `-2` below.
#[must_use]
pub fn format_to_par(diff: i32) -> String {
    match diff.cmp(&0) {
        Ordering::Equal => EVEN.to_string(),
        Ordering::Greater => format!("+{diff}"),
        Ordering::Less => diff.to_string(),
    }
}

/// Summary-table cell for one round: a prompt, the running differential, or `72 (EVEN)` once done.
#[must_use]
pub fn format_round(round: &RoundSummary) -> String {
    match round.total {
        None => ENTER_PROMPT.to_string(),
        Some(total) if round.complete => {
            format!("{total} ({})", format_to_par(round.score_to_par))
        }
        Some(_) => format_to_par(round.score_to_par),
    }
}

/// Scorecard subtotal for a nine or a full round: `19 (-1)`, or `-` before any hole is in.
#[must_use]
pub fn format_subtotal(summary: &RoundSummary) -> String {
    match summary.total {
        None => NO_SCORE.to_string(),
        Some(total) => format!("{total} ({})", format_to_par(summary.score_to_par)),
    }
}

#[must_use]
pub fn format_pairing_total(pairing: &PairingSummary) -> String {
    if !pairing.has_scores {
        NO_SCORE.to_string()
    } else if pairing.complete {
        format!(
            "{} ({})",
            pairing.total_score,
            format_to_par(pairing.score_to_par)
        )
    } else {
        format_to_par(pairing.score_to_par)
    }
}

#[must_use]
pub fn format_team_to_par(team: &TeamSummary) -> String {
    if team.has_scores {
        format_to_par(team.score_to_par)
    } else {
        NO_SCORE.to_string()
    }
}

#[must_use]
pub fn format_team_total(team: &TeamSummary) -> String {
    if team.has_scores {
        team.total_score.to_string()
    } else {
        NO_SCORE.to_string()
    }
}

/// css hook for colouring a differential.
#[must_use]
pub fn to_par_class(diff: i32) -> &'static str {
    match diff.cmp(&0) {
        Ordering::Less => "under-par",
        Ordering::Equal => "even-par",
        Ordering::Greater => "over-par",
    }
}

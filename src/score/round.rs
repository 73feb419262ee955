use serde::Serialize;

use crate::model::{Course, RoundScores};

/// Sum of the recorded strokes, `None` when nothing has been recorded yet.
/// Saturates at the `i32` bounds.
#[must_use]
pub fn round_total(slots: &[Option<i32>]) -> Option<i32> {
    slots
        .iter()
        .flatten()
        .copied()
        .reduce(i32::saturating_add)
}

#[must_use]
pub fn holes_remaining(slots: &[Option<i32>]) -> usize {
    slots.iter().filter(|slot| slot.is_none()).count()
}

/// Par summed over only the holes that have a score.
#[must_use]
pub fn par_for_completed_holes(slots: &[Option<i32>], pars: &[i32]) -> i32 {
    slots
        .iter()
        .zip(pars)
        .filter(|(slot, _)| slot.is_some())
        .fold(0, |acc, (_, &par)| acc.saturating_add(par))
}

#[must_use]
pub fn is_complete(slots: &[Option<i32>]) -> bool {
    slots.iter().all(Option::is_some)
}

/// Derived numbers for a run of holes: a full round, or one nine of it.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub total: Option<i32>,
    pub holes_played: usize,
    pub holes_remaining: usize,
    pub par_for_completed_holes: i32,
    pub complete: bool,
    /// Against par for the holes played while incomplete, against full par once complete.
    /// Zero when nothing is recorded.
    pub score_to_par: i32,
}

impl RoundSummary {
    #[must_use]
    pub fn for_round(round: &RoundScores, course: &Course) -> Self {
        Self::from_slots(round.slots(), course.pars(), course.total_par())
    }

    #[must_use]
    pub fn front_nine(round: &RoundScores, course: &Course) -> Self {
        Self::from_slots(
            round.front_nine(),
            course.front_nine(),
            course.front_nine_par(),
        )
    }

    #[must_use]
    pub fn back_nine(round: &RoundScores, course: &Course) -> Self {
        Self::from_slots(round.back_nine(), course.back_nine(), course.back_nine_par())
    }

    fn from_slots(slots: &[Option<i32>], pars: &[i32], full_par: i32) -> Self {
        let total = round_total(slots);
        let holes_remaining = holes_remaining(slots);
        let par_for_completed_holes = par_for_completed_holes(slots, pars);
        let complete = is_complete(slots);
        let score_to_par = match total {
            None => 0,
            Some(total) if complete => total.saturating_sub(full_par),
            Some(total) => total.saturating_sub(par_for_completed_holes),
        };
        Self {
            total,
            holes_played: slots.len() - holes_remaining,
            holes_remaining,
            par_for_completed_holes,
            complete,
            score_to_par,
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.total.is_some()
    }
}

use maud::{Markup, html};

use crate::model::HoleResult;
use crate::score::RoundSummary;
use crate::score::to_par_class;

pub fn score_with_shape(strokes: i32, result: HoleResult) -> Markup {
    let shape = match result {
        HoleResult::Albatross | HoleResult::Eagle => "◆",
        HoleResult::Birdie | HoleResult::Par => "●",
        HoleResult::Bogey | HoleResult::DoubleBogey | HoleResult::TripleBogey => "▲",
    };

    html! {
        span class=(result.css_class()) { (shape) " " (strokes) }
    }
}

/// Class for a summary-table round button: `not-started` until a hole is in.
#[must_use]
pub fn round_cell_class(round: &RoundSummary) -> &'static str {
    if round.is_started() {
        to_par_class(round.score_to_par)
    } else {
        "not-started"
    }
}

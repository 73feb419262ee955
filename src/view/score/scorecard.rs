use maud::{Markup, html};

use super::types::HoleTarget;
use super::utils::score_with_shape;
use crate::model::{Course, HoleResult, NINE, PairingId, RoundKey, RoundScores};
use crate::score::{ENTER_PROMPT, RoundSummary, format_subtotal, format_to_par, to_par_class};

pub struct ScorecardView<'a> {
    pub pairing_id: PairingId,
    pub label: &'a str,
    pub round: RoundKey,
    pub scores: &'a RoundScores,
    pub course: &'a Course,
    /// Shown above the card after an edit, e.g. when the remote did not take it.
    pub notice: Option<&'a str>,
}

#[must_use]
pub fn render_scorecard(view: &ScorecardView<'_>) -> Markup {
    let round = RoundSummary::for_round(view.scores, view.course);
    let front = RoundSummary::front_nine(view.scores, view.course);
    let back = RoundSummary::back_nine(view.scores, view.course);

    html! {
        div class="scorecard" data-pairing=(view.pairing_id) data-round=(view.round.as_str()) {
            div class="scorecard-header" {
                h2 { (view.label) " - " (view.round.label()) }
                button class="close" hx-get="scores" hx-target="#scores" hx-swap="innerHTML"
                    onclick="document.getElementById('detail').innerHTML=''" { "Close" }
            }
            @if let Some(notice) = view.notice {
                p class="notice" { (notice) }
            }
            (render_nine(view, "Front 9", 0, &front))
            (render_nine(view, "Back 9", NINE, &back))
            div class="round-summary" {
                div class="round-total" {
                    "Round Total: "
                    @match round.total {
                        Some(total) => { (total) },
                        None => { "-" },
                    }
                }
                div class="holes-remaining" { "Holes Remaining: " (round.holes_remaining) }
                @if round.is_started() {
                    div class={ "round-to-par " (to_par_class(round.score_to_par)) } {
                        "Score to Par: " (format_to_par(round.score_to_par))
                    }
                }
            }
        }
    }
}

fn render_nine(
    view: &ScorecardView<'_>,
    title: &str,
    offset: usize,
    subtotal: &RoundSummary,
) -> Markup {
    html! {
        div class="nine" {
            h3 { (title) }
            table class="styled-table holes" {
                tbody {
                    @for hole_index in offset..offset + NINE {
                        (render_hole_row(view, hole_index))
                    }
                }
            }
            div class="nine-total" { (title) " Total: " (format_subtotal(subtotal)) }
        }
    }
}

fn render_hole_row(view: &ScorecardView<'_>, hole_index: usize) -> Markup {
    let par = view.course.par(hole_index).unwrap_or_default();
    let target = HoleTarget {
        pairing_id: view.pairing_id,
        round: view.round,
        hole_index,
    };

    html! {
        tr data-hole=(hole_index + 1) {
            td { "Hole " (hole_index + 1) }
            td { "Par " (par) }
            td {
                button class="hole-button"
                    hx-get=(target.picker_url())
                    hx-target="#detail"
                    hx-swap="innerHTML" {
                    @match view.scores.get(hole_index) {
                        Some(strokes) => { (score_with_shape(strokes, HoleResult::for_hole(strokes, par))) },
                        None => { (ENTER_PROMPT) },
                    }
                }
            }
        }
    }
}

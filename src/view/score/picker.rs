use maud::{Markup, html};
use std::ops::RangeInclusive;

use super::types::{HoleTarget, scorecard_url};
use crate::model::{HoleResult, MIN_STROKES};

/// Stroke choices offered for a hole: one up to double bogey.
#[must_use]
pub fn score_options(par: i32) -> RangeInclusive<i32> {
    MIN_STROKES..=par.saturating_add(2)
}

pub struct PickerView<'a> {
    pub target: HoleTarget,
    pub label: &'a str,
    pub par: i32,
    pub current: Option<i32>,
}

#[must_use]
pub fn render_score_picker(view: &PickerView<'_>) -> Markup {
    let target = view.target;

    html! {
        div class="score-picker" {
            h3 { (view.label) " - Hole " (target.hole_index + 1) }
            p class="picker-info" { (target.round.label()) " • Par " (view.par) }
            div class="score-options" {
                @for strokes in score_options(view.par) {
                    @let result = HoleResult::for_hole(strokes, view.par);
                    @let selected = view.current == Some(strokes);
                    form hx-post="scores" hx-target="#detail" hx-swap="innerHTML" {
                        (hidden_fields(target))
                        input type="hidden" name="score" value=(strokes);
                        button type="submit" class=(option_class(result, selected)) {
                            (strokes)
                        }
                    }
                }
            }
            div class="picker-actions" {
                button class="cancel"
                    hx-get=(scorecard_url(target.pairing_id, target.round))
                    hx-target="#detail"
                    hx-swap="innerHTML" { "Cancel" }
                @if view.current.is_some() {
                    form hx-post="scores" hx-target="#detail" hx-swap="innerHTML" {
                        (hidden_fields(target))
                        input type="hidden" name="clear" value="1";
                        button type="submit" class="clear" { "Clear" }
                    }
                }
            }
        }
    }
}

fn option_class(result: HoleResult, selected: bool) -> String {
    if selected {
        format!("score-option {} selected", result.css_class())
    } else {
        format!("score-option {}", result.css_class())
    }
}

fn hidden_fields(target: HoleTarget) -> Markup {
    html! {
        input type="hidden" name="pairing" value=(target.pairing_id);
        input type="hidden" name="round" value=(target.round.as_str());
        input type="hidden" name="hole" value=(target.hole_index);
    }
}

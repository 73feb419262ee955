use maud::{Markup, html};

use super::types::scorecard_url;
use super::utils::round_cell_class;
use crate::model::RoundKey;
use crate::score::{
    Leaderboard, RankedPairing, TeamSummary, format_pairing_total, format_round,
    format_team_to_par, format_team_total, to_par_class,
};

#[must_use]
pub fn render_team_cards(board: &Leaderboard) -> Markup {
    html! {
        div class="team-cards" {
            @for team in &board.teams {
                (render_team_card(team, board))
            }
        }
    }
}

fn render_team_card(team: &TeamSummary, board: &Leaderboard) -> Markup {
    let is_best = board.both_sides_complete && board.best_team.as_deref() == Some(team.name.as_str());
    let is_worst =
        board.both_sides_complete && board.worst_team.as_deref() == Some(team.name.as_str());
    let diff_class = if team.has_scores {
        to_par_class(team.score_to_par)
    } else {
        "not-started"
    };

    html! {
        div class="team-card" data-team=(team.name) {
            h2 { (team.name) }
            div class={ "team-to-par " (diff_class) } { (format_team_to_par(team)) }
            div class="team-total" { "Total Score: " (format_team_total(team)) }
            div class="team-holes" { "Holes Remaining: " (team.total_holes_remaining) }
            @if is_best {
                div class="team-result winner" { "Winners" }
            }
            @if is_worst {
                div class="team-result loser" { "Losers" }
            }
        }
    }
}

#[must_use]
pub fn render_pairings_table(board: &Leaderboard) -> Markup {
    html! {
        h3 { "Pairings & Scores" }
        table class="styled-table pairings" {
            thead {
                tr {
                    th { "Team" }
                    th { "Pairing" }
                    th { "Round 1" }
                    th { "Round 2" }
                    th { "Total" }
                }
            }
            tbody {
                @for ranked in &board.pairings {
                    (render_pairing_row(ranked))
                }
            }
        }
    }
}

fn render_pairing_row(ranked: &RankedPairing) -> Markup {
    let summary = &ranked.summary;
    let total_class = if summary.has_scores {
        to_par_class(summary.score_to_par)
    } else {
        "not-started"
    };

    html! {
        tr data-pairing=(summary.pairing_id) {
            td { (summary.team) }
            td class="pairing-label" {
                (summary.label)
                @if ranked.is_leader {
                    span class="standing leader" title="Leader" { " 👑" }
                }
                @if ranked.is_trailer {
                    span class="standing trailer" title="Last place" { " 💩" }
                }
            }
            @for key in RoundKey::ALL {
                @let round = summary.round(key);
                td class="round-cell" {
                    button class={ "round-button " (round_cell_class(round)) }
                        data-round=(key.as_str())
                        hx-get=(scorecard_url(summary.pairing_id, key))
                        hx-target="#detail"
                        hx-swap="innerHTML" {
                        (format_round(round))
                    }
                }
            }
            td class={ "pairing-total " (total_class) } { (format_pairing_total(summary)) }
        }
    }
}

use maud::{Markup, html};

use super::scoreboard::{render_pairings_table, render_team_cards};
use super::types::ConnectionStatus;
use crate::score::Leaderboard;

#[must_use]
pub fn render_connection_status(status: &ConnectionStatus) -> Markup {
    let (class, text) = if status.connected {
        ("connection connected", "Connected")
    } else {
        ("connection disconnected", "Disconnected")
    };

    html! {
        div class="status-bar" {
            span class=(class) { (text) }
            button class="refresh-button"
                hx-post="refresh"
                hx-target="#scores"
                hx-swap="innerHTML"
                disabled[status.refreshing] {
                @if status.refreshing { "Refreshing..." } @else { "Refresh" }
            }
            @if let Some(ago) = &status.last_refresh {
                span class="refresh" { "Last updated " (ago) " ago." }
            }
        }
    }
}

/// The `#scores` fragment: connection line, team cards, ranked pairings.
#[must_use]
pub fn render_scores_template(board: &Leaderboard, status: &ConnectionStatus) -> Markup {
    html! {
        (render_connection_status(status))
        (render_team_cards(board))
        (render_pairings_table(board))
    }
}

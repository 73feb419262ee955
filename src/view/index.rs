use maud::{Markup, html};

use crate::HTMX_PATH;

/// Page shell. The scoreboard loads into `#scores` and re-polls on the refresh interval;
/// scorecards and the score picker load into `#detail`.
#[must_use]
pub fn render_index_template(title: &str, refresh_secs: u64) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 { (title) }
            p class="subtitle" { "Live Golf Scoreboard" }
            div id="scores"
                hx-get="scores"
                hx-trigger=(format!("load, every {refresh_secs}s"))
                hx-swap="innerHTML" {
                p class="htmx-indicator" { "Loading scores..." }
            }
            div id="detail" {}
        }
    }
}

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::decode::{decode_edit, decode_picker, decode_scorecard, flag};
use crate::controller::client::ScoresApi;
use crate::controller::store::{EditOutcome, ScoreStore};
use crate::error::AppError;
use crate::model::{PairingId, RoundKey};
use crate::score::Leaderboard;
use crate::view::index::render_index_template;
use crate::view::score::{
    ConnectionStatus, HoleTarget, PickerView, ScorecardView, render_score_picker,
    render_scorecard, render_scores_template,
};

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: ScoreStore,
    pub api: Arc<dyn ScoresApi>,
    pub refresh_interval: Duration,
}

#[derive(Serialize)]
struct ScoresPayload<'a> {
    title: &'a str,
    connected: bool,
    last_updated: Option<String>,
    leaderboard: Leaderboard,
}

fn error_response(e: &AppError) -> HttpResponse {
    if e.is_client_error() {
        HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
    } else {
        HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
    }
}

fn html(markup: maud::Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn index(state: Data<AppState>) -> impl Responder {
    let markup = render_index_template(
        &state.store.event().title,
        state.refresh_interval.as_secs().max(1),
    );
    html(markup)
}

async fn render_scores(state: &AppState, want_json: bool) -> HttpResponse {
    let snapshot = state.store.snapshot().await;
    let event = state.store.event();
    let board = Leaderboard::build(&event.course, &event.roster, &snapshot.table);

    if want_json {
        HttpResponse::Ok().json(ScoresPayload {
            title: &event.title,
            connected: snapshot.connected,
            last_updated: snapshot.last_updated,
            leaderboard: board,
        })
    } else {
        let status = ConnectionStatus::from_snapshot(&snapshot, state.store.now());
        html(render_scores_template(&board, &status))
    }
}

pub async fn scores(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    render_scores(&state, flag(&query.into_inner(), "json")).await
}

pub async fn refresh(state: Data<AppState>) -> impl Responder {
    // a failed fetch is already recorded on the store and shows as disconnected
    let _ = state.store.refresh(state.api.as_ref()).await;
    render_scores(&state, false).await
}

async fn render_card(
    state: &AppState,
    pairing_id: PairingId,
    round: RoundKey,
    notice: Option<&str>,
) -> Result<HttpResponse, AppError> {
    let event = state.store.event();
    let (_, pairing) = event
        .roster
        .find(pairing_id)
        .ok_or_else(|| AppError::NotFound(format!("pairing {pairing_id}")))?;
    let snapshot = state.store.snapshot().await;
    let scores = snapshot
        .table
        .pairing(pairing_id)
        .map(|p| p.round(round).clone())
        .unwrap_or_default();

    Ok(html(render_scorecard(&ScorecardView {
        pairing_id,
        label: &pairing.label,
        round,
        scores: &scores,
        course: &event.course,
        notice,
    })))
}

pub async fn scorecard(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let request = match decode_scorecard(&query.into_inner()) {
        Ok(request) => request,
        Err(e) => return error_response(&e),
    };
    render_card(&state, request.pairing_id, request.round, None)
        .await
        .unwrap_or_else(|e| error_response(&e))
}

pub async fn picker(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let request = match decode_picker(&query.into_inner()) {
        Ok(request) => request,
        Err(e) => return error_response(&e),
    };
    let event = state.store.event();
    let Some((_, pairing)) = event.roster.find(request.pairing_id) else {
        return error_response(&AppError::NotFound(format!(
            "pairing {}",
            request.pairing_id
        )));
    };
    let Some(par) = event.course.par(request.hole_index) else {
        return error_response(&AppError::NotFound(format!(
            "hole index {}",
            request.hole_index
        )));
    };
    let current = state
        .store
        .snapshot()
        .await
        .table
        .pairing(request.pairing_id)
        .and_then(|p| p.round(request.round).get(request.hole_index));

    html(render_score_picker(&PickerView {
        target: HoleTarget {
            pairing_id: request.pairing_id,
            round: request.round,
            hole_index: request.hole_index,
        },
        label: &pairing.label,
        par,
        current,
    }))
}

/// Applies a picker choice and answers with the updated scorecard.
pub async fn submit_score(
    form: web::Form<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let edit = match decode_edit(&form.into_inner()) {
        Ok(edit) => edit,
        Err(e) => return error_response(&e),
    };

    let notice = match state.store.submit_edit(state.api.as_ref(), edit).await {
        Ok(EditOutcome::Saved) => {
            info!(
                pairing = edit.pairing_id,
                round = %edit.round,
                hole = edit.hole_index + 1,
                score = ?edit.score,
                "score saved"
            );
            None
        }
        Ok(EditOutcome::LocalOnly(reason)) => Some(format!(
            "Not saved to the scoreboard yet, kept here until the next refresh ({reason})."
        )),
        Err(e) => return error_response(&e),
    };

    render_card(&state, edit.pairing_id, edit.round, notice.as_deref())
        .await
        .unwrap_or_else(|e| error_response(&e))
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Registers every scoreboard route; paths are relative to wherever this is mounted.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/scores", web::get().to(scores))
        .route("/scores", web::post().to(submit_score))
        .route("/scorecard", web::get().to(scorecard))
        .route("/picker", web::get().to(picker))
        .route("/refresh", web::post().to(refresh))
        .route("/health", web::get().to(health));
}

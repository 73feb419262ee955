use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::{App, http::StatusCode, test, web};
use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use forescore::controller::client::ScoresApi;
use forescore::controller::score::{AppState, routes};
use forescore::controller::store::ScoreStore;
use forescore::model::{EventConfig, RoundKey, RoundScores, ScoreTable};

mod common;
use common::{FakeApi, pairing_scores, round_of};

fn app_state(fake: &Arc<FakeApi>) -> AppState {
    let api: Arc<dyn ScoresApi> = fake.clone();
    AppState {
        store: ScoreStore::new(EventConfig::default()).with_refresh_after_save(Duration::ZERO),
        api,
        refresh_interval: Duration::from_secs(30),
    }
}

fn select_all(body: &str, selector: &str) -> Vec<String> {
    let document = Html::parse_fragment(body);
    let selector = Selector::parse(selector).expect("valid selector");
    document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

macro_rules! service {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .service(web::scope("/forescore").configure(routes)),
        )
        .await
    };
}

async fn body_of<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).expect("response should be UTF-8")
}

#[actix_web::test]
async fn test_index_polls_scores() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeApi::seeded(&EventConfig::default());
    let app = service!(app_state(&fake));

    let req = test::TestRequest::get().uri("/forescore/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = body_of(resp).await;

    let document = Html::parse_document(&body);
    let scores = Selector::parse("div#scores").expect("valid selector");
    let div = document.select(&scores).next().expect("scores container");
    assert_eq!(div.value().attr("hx-get"), Some("scores"));
    assert_eq!(div.value().attr("hx-trigger"), Some("load, every 30s"));
    assert!(body.contains("2025 TruckMovers Invitational"));
    Ok(())
}

#[actix_web::test]
async fn test_scores_fragment_lists_teams_and_pairings() -> Result<(), Box<dyn std::error::Error>> {
    let event = EventConfig::default();
    let mut remote = ScoreTable::seeded(&event.roster);
    remote.insert(1, pairing_scores(round_of(&[3, 4]), RoundScores::default()));
    remote.insert(8, pairing_scores(round_of(&[6, 6]), RoundScores::default()));
    let fake = FakeApi::with_table(remote);
    let state = app_state(&fake);
    state.store.refresh(fake.as_ref()).await?;
    let app = service!(state);

    let req = test::TestRequest::get().uri("/forescore/scores").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = body_of(resp).await;

    assert_eq!(select_all(&body, ".team-card h2"), vec!["Royals", "Chiefs"]);
    assert_eq!(select_all(&body, ".connection"), vec!["Connected"]);
    assert_eq!(select_all(&body, "tbody tr[data-pairing]").len(), 8);

    let labels = select_all(&body, "td.pairing-label");
    assert!(labels[0].starts_with("Chris-Tyler") && labels[0].contains('👑'));
    assert!(labels[7].starts_with("Ethan-Bross") && labels[7].contains('💩'));

    let first_row = select_all(&body, "tr[data-pairing=\"1\"] .round-button");
    assert_eq!(first_row, vec!["-1", "Enter"]);
    assert_eq!(select_all(&body, ".team-result").len(), 0);

    let document = Html::parse_fragment(&body);
    let hx = Selector::parse("[hx-get]").expect("valid selector");
    for element in document.select(&hx) {
        let target = element.value().attr("hx-get").unwrap_or_default();
        assert!(!target.starts_with('/'), "hx-get should be relative: {target}");
        let follow = test::TestRequest::get()
            .uri(&format!("/forescore/{target}"))
            .to_request();
        let resp = test::call_service(&app, follow).await;
        assert!(resp.status().is_success(), "{target} returned {}", resp.status());
    }
    Ok(())
}

#[actix_web::test]
async fn test_scores_json() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeApi::seeded(&EventConfig::default());
    let state = app_state(&fake);
    state.store.refresh(fake.as_ref()).await?;
    let app = service!(state);

    let req = test::TestRequest::get()
        .uri("/forescore/scores?json=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["title"], "2025 TruckMovers Invitational");
    assert_eq!(body["connected"], true);
    assert_eq!(body["last_updated"], common::REMOTE_TIMESTAMP);
    assert_eq!(body["leaderboard"]["teams"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["leaderboard"]["pairings"].as_array().map(Vec::len), Some(8));
    assert_eq!(body["leaderboard"]["best_team"], Value::Null);
    Ok(())
}

#[actix_web::test]
async fn test_scorecard_shows_nines_and_summary() -> Result<(), Box<dyn std::error::Error>> {
    let event = EventConfig::default();
    let mut remote = ScoreTable::seeded(&event.roster);
    remote.insert(3, pairing_scores(round_of(&[4, 3, 5, 4, 3]), RoundScores::default()));
    let fake = FakeApi::with_table(remote);
    let state = app_state(&fake);
    state.store.refresh(fake.as_ref()).await?;
    let app = service!(state);

    let req = test::TestRequest::get()
        .uri("/forescore/scorecard?pairing=3&round=round1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = body_of(resp).await;

    assert_eq!(select_all(&body, "tr[data-hole]").len(), 18);
    assert_eq!(select_all(&body, ".nine h3"), vec!["Front 9", "Back 9"]);
    assert_eq!(
        select_all(&body, ".nine-total"),
        vec!["Front 9 Total: 19 (-1)", "Back 9 Total: -"]
    );
    assert_eq!(select_all(&body, ".round-total"), vec!["Round Total: 19"]);
    assert_eq!(select_all(&body, ".holes-remaining"), vec!["Holes Remaining: 13"]);
    assert_eq!(select_all(&body, ".round-to-par"), vec!["Score to Par: -1"]);

    let hole2 = select_all(&body, "tr[data-hole=\"2\"] .hole-button");
    assert_eq!(hole2, vec!["● 3"]);
    let hole6 = select_all(&body, "tr[data-hole=\"6\"] .hole-button");
    assert_eq!(hole6, vec!["Enter"]);
    Ok(())
}

#[actix_web::test]
async fn test_picker_offers_one_to_double_bogey() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeApi::seeded(&EventConfig::default());
    let app = service!(app_state(&fake));

    // hole 3 is a par 5
    let req = test::TestRequest::get()
        .uri("/forescore/picker?pairing=2&round=round2&hole=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = body_of(resp).await;

    let options = select_all(&body, "button.score-option");
    assert_eq!(options, (1..=7).map(|s| s.to_string()).collect::<Vec<_>>());
    assert_eq!(select_all(&body, "h3"), vec!["Todd-Joe - Hole 3"]);
    // nothing recorded yet, so nothing to clear
    assert!(select_all(&body, "button.clear").is_empty());
    Ok(())
}

#[actix_web::test]
async fn test_posting_a_score_updates_the_card() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeApi::seeded(&EventConfig::default());
    let state = app_state(&fake);
    let store = state.store.clone();
    let app = service!(state);

    let req = test::TestRequest::post()
        .uri("/forescore/scores")
        .set_form([("pairing", "3"), ("round", "round2"), ("hole", "0"), ("score", "5")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = body_of(resp).await;

    assert_eq!(select_all(&body, "tr[data-hole=\"1\"] .hole-button"), vec!["▲ 5"]);
    assert!(select_all(&body, ".notice").is_empty());
    assert_eq!(fake.recorded_updates().len(), 1);

    let board = store.leaderboard().await;
    assert_eq!(board.pairing(3).unwrap().summary.round(RoundKey::Round2).total, Some(5));

    let picker = test::TestRequest::get()
        .uri("/forescore/picker?pairing=3&round=round2&hole=0")
        .to_request();
    let body = body_of(test::call_service(&app, picker).await).await;
    assert_eq!(select_all(&body, "button.score-option.selected"), vec!["5"]);
    assert_eq!(select_all(&body, "button.clear"), vec!["Clear"]);
    Ok(())
}

#[actix_web::test]
async fn test_rejected_post_keeps_the_local_score() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeApi::seeded(&EventConfig::default());
    fake.set_fail_update(true);
    let app = service!(app_state(&fake));

    let req = test::TestRequest::post()
        .uri("/forescore/scores")
        .set_form([("pairing", "3"), ("round", "round2"), ("hole", "0"), ("score", "5")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = body_of(resp).await;

    assert_eq!(select_all(&body, "tr[data-hole=\"1\"] .hole-button"), vec!["▲ 5"]);
    let notice = select_all(&body, ".notice");
    assert_eq!(notice.len(), 1);
    assert!(notice[0].contains("scoreboard is locked"));

    let req = test::TestRequest::get().uri("/forescore/scores").to_request();
    let body = body_of(test::call_service(&app, req).await).await;
    assert_eq!(select_all(&body, ".connection"), vec!["Disconnected"]);
    Ok(())
}

#[actix_web::test]
async fn test_clear_post() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeApi::seeded(&EventConfig::default());
    let state = app_state(&fake);
    let store = state.store.clone();
    let app = service!(state);

    for form in [
        vec![("pairing", "7"), ("round", "round1"), ("hole", "4"), ("score", "3")],
        vec![("pairing", "7"), ("round", "round1"), ("hole", "4"), ("clear", "1")],
    ] {
        let req = test::TestRequest::post()
            .uri("/forescore/scores")
            .set_form(form)
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
    }

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.table.pairing(7).unwrap().round1.get(4), None);
    assert_eq!(fake.recorded_updates().len(), 2);
    Ok(())
}

#[actix_web::test]
async fn test_bad_requests() {
    let fake = FakeApi::seeded(&EventConfig::default());
    let app = service!(app_state(&fake));

    let gets = [
        "/forescore/scorecard?round=round1",
        "/forescore/scorecard?pairing=x&round=round1",
        "/forescore/scorecard?pairing=3&round=round9",
        "/forescore/scorecard?pairing=99&round=round1",
        "/forescore/picker?pairing=3&round=round1",
        "/forescore/picker?pairing=3&round=round1&hole=18",
    ];
    for uri in gets {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }

    let posts = [
        vec![("pairing", "3"), ("round", "round1"), ("hole", "0"), ("score", "0")],
        vec![("pairing", "3"), ("round", "round1"), ("hole", "0"), ("score", "11")],
        vec![("pairing", "3"), ("round", "round1"), ("hole", "0")],
        vec![("pairing", "3"), ("round", "round1"), ("hole", "0"), ("score", "four")],
    ];
    for form in posts {
        let req = test::TestRequest::post()
            .uri("/forescore/scores")
            .set_form(form.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{form:?}");
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }
    assert!(fake.recorded_updates().is_empty());
}

#[actix_web::test]
async fn test_refresh_and_health() -> Result<(), Box<dyn std::error::Error>> {
    let event = EventConfig::default();
    let mut remote = ScoreTable::seeded(&event.roster);
    remote.insert(5, pairing_scores(round_of(&[4]), RoundScores::default()));
    let fake = FakeApi::with_table(remote);
    let app = service!(app_state(&fake));

    let req = test::TestRequest::post().uri("/forescore/refresh").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(fake.fetch_count(), 1);
    let body = body_of(resp).await;
    assert_eq!(
        select_all(&body, "tr[data-pairing=\"5\"] .round-button"),
        vec!["EVEN", "Enter"]
    );

    fake.set_fail_fetch(true);
    let req = test::TestRequest::post().uri("/forescore/refresh").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = body_of(resp).await;
    assert_eq!(select_all(&body, ".connection"), vec!["Disconnected"]);
    // the last good table is still shown
    assert_eq!(
        select_all(&body, "tr[data-pairing=\"5\"] .round-button"),
        vec!["EVEN", "Enter"]
    );

    let req = test::TestRequest::get().uri("/forescore/health").to_request();
    assert!(test::call_service(&app, req).await.status().is_success());
    Ok(())
}

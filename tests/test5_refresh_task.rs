mod common;

use common::{FakeApi, pairing_scores, round_of};
use forescore::controller::client::ScoresApi;
use forescore::controller::refresh::spawn_refresh_task;
use forescore::controller::store::ScoreStore;
use forescore::model::{EventConfig, RoundScores, ScoreTable};
use std::sync::Arc;
use std::time::Duration;

async fn wait_for(mut done: impl FnMut() -> bool) -> bool {
    for _ in 0..200 {
        if done() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

#[tokio::test]
async fn test_refresh_task_polls_until_shutdown() {
    let event = EventConfig::default();
    let store = ScoreStore::new(event.clone());
    let fake = FakeApi::seeded(&event);
    let api: Arc<dyn ScoresApi> = fake.clone();

    let handle = spawn_refresh_task(store.clone(), api, Duration::from_millis(20));
    assert!(wait_for(|| fake.fetch_count() >= 3).await);

    handle.shutdown().await;
    let stopped_at = fake.fetch_count();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(fake.fetch_count(), stopped_at);
}

#[tokio::test]
async fn test_first_refresh_is_immediate() {
    let event = EventConfig::default();
    let store = ScoreStore::new(event.clone());
    let mut remote = ScoreTable::seeded(&event.roster);
    remote.insert(6, pairing_scores(round_of(&[4, 4]), RoundScores::default()));
    let fake = FakeApi::with_table(remote);

    let handle = spawn_refresh_task(store.clone(), fake.clone(), Duration::from_secs(3600));
    assert!(wait_for(|| fake.fetch_count() >= 1).await);
    // the fetch is counted before the store is updated
    tokio::time::sleep(Duration::from_millis(50)).await;

    let board = store.leaderboard().await;
    assert_eq!(board.pairing(6).unwrap().summary.holes_played, 2);
    handle.shutdown().await;
}

#[tokio::test]
async fn test_refresh_task_survives_failures() {
    let event = EventConfig::default();
    let store = ScoreStore::new(event.clone());
    let fake = FakeApi::seeded(&event);
    fake.set_fail_fetch(true);

    let handle = spawn_refresh_task(store.clone(), fake.clone(), Duration::from_millis(20));
    assert!(wait_for(|| fake.fetch_count() >= 2).await);
    assert!(!handle.is_finished());
    assert!(!store.snapshot().await.connected);

    fake.set_fail_fetch(false);
    let target = fake.fetch_count() + 2;
    assert!(wait_for(|| fake.fetch_count() >= target).await);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(store.snapshot().await.connected);

    handle.shutdown().await;
}

#[tokio::test]
async fn test_dropping_the_handle_stops_the_task() {
    let event = EventConfig::default();
    let store = ScoreStore::new(event.clone());
    let fake = FakeApi::seeded(&event);

    let handle = spawn_refresh_task(store, fake.clone(), Duration::from_millis(20));
    assert!(wait_for(|| fake.fetch_count() >= 1).await);
    drop(handle);

    tokio::time::sleep(Duration::from_millis(50)).await;
    let stopped_at = fake.fetch_count();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(fake.fetch_count(), stopped_at);
}

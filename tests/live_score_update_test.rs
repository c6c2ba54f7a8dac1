use serde_json::json;
use uuid::Uuid;

mod common;
use common::fixtures::{create_match, fetch_scores};
use common::live_helpers::{
    connect_live_ws, expect_json, next_text, send_command, subscribe, wait_for_room_subscribers,
};
use common::utils::{create_test_user_and_login, spawn_app};

#[tokio::test]
async fn score_update_fans_out_to_every_room_member() {
    let app = spawn_app().await;
    let (_username, token) = create_test_user_and_login(&app.address).await;
    let match_id = create_match(&app, &token, "football").await;

    // One authenticated viewer, one anonymous: the gateway soft-verifies
    // credentials and accepts both.
    let mut viewer_a = connect_live_ws(&app.address, Some(&token)).await;
    let mut viewer_b = connect_live_ws(&app.address, None).await;
    subscribe(&mut viewer_a, match_id).await;
    subscribe(&mut viewer_b, match_id).await;
    wait_for_room_subscribers(match_id, 2).await;

    send_command(
        &mut viewer_a,
        json!({
            "type": "score-update",
            "payload": {
                "matchId": match_id.to_string(),
                "scoreHome": 3,
                "scoreAway": 1,
                "status": "LIVE"
            }
        }),
    )
    .await;

    for viewer in [&mut viewer_a, &mut viewer_b] {
        let update = expect_json(viewer, 5, "match-update broadcast").await;
        assert_eq!(update["event_type"], "match-update");
        assert_eq!(update["match"]["score_home"], 3);
        assert_eq!(update["match"]["score_away"], 1);
        assert_eq!(update["match"]["status"], "LIVE");
    }

    // Exactly one broadcast per member
    assert!(next_text(&mut viewer_a, 1).await.is_none());
    assert!(next_text(&mut viewer_b, 1).await.is_none());

    assert_eq!(fetch_scores(&app, match_id).await, (3, 1, "live".to_string()));
}

#[tokio::test]
async fn non_subscribers_never_receive_room_broadcasts() {
    let app = spawn_app().await;
    let (_username, token) = create_test_user_and_login(&app.address).await;
    let match_a = create_match(&app, &token, "football").await;
    let match_b = create_match(&app, &token, "football").await;

    let mut viewer_a = connect_live_ws(&app.address, Some(&token)).await;
    let mut viewer_b = connect_live_ws(&app.address, Some(&token)).await;
    subscribe(&mut viewer_a, match_a).await;
    subscribe(&mut viewer_b, match_b).await;
    wait_for_room_subscribers(match_a, 1).await;
    wait_for_room_subscribers(match_b, 1).await;

    send_command(
        &mut viewer_b,
        json!({
            "type": "score-update",
            "payload": {
                "matchId": match_a.to_string(),
                "scoreHome": 1,
                "scoreAway": 0
            }
        }),
    )
    .await;

    let update = expect_json(&mut viewer_a, 5, "match-update broadcast").await;
    assert_eq!(update["match"]["id"], match_a.to_string());

    // Viewer B is only in match B's room and hears nothing.
    assert!(next_text(&mut viewer_b, 2).await.is_none());
}

#[tokio::test]
async fn invalid_score_update_is_dropped_without_broadcast() {
    let app = spawn_app().await;
    let (_username, token) = create_test_user_and_login(&app.address).await;
    let match_id = create_match(&app, &token, "football").await;

    let mut viewer = connect_live_ws(&app.address, Some(&token)).await;
    subscribe(&mut viewer, match_id).await;
    wait_for_room_subscribers(match_id, 1).await;

    // Negative score fails validation; the peer gets no error back.
    send_command(
        &mut viewer,
        json!({
            "type": "score-update",
            "payload": {
                "matchId": match_id.to_string(),
                "scoreHome": -1,
                "scoreAway": 0
            }
        }),
    )
    .await;

    // Missing matchId fails deserialization entirely.
    send_command(
        &mut viewer,
        json!({
            "type": "score-update",
            "payload": { "scoreHome": 1, "scoreAway": 0 }
        }),
    )
    .await;

    assert!(next_text(&mut viewer, 2).await.is_none());
    assert_eq!(fetch_scores(&app, match_id).await, (0, 0, "scheduled".to_string()));
}

#[tokio::test]
async fn score_update_for_missing_match_is_dropped() {
    let app = spawn_app().await;
    let (_username, token) = create_test_user_and_login(&app.address).await;
    let ghost_match = Uuid::new_v4();

    let mut viewer = connect_live_ws(&app.address, Some(&token)).await;
    // Rooms exist independently of the store: joining a room for a match
    // that does not exist is allowed, it just never hears anything.
    subscribe(&mut viewer, ghost_match).await;
    wait_for_room_subscribers(ghost_match, 1).await;

    send_command(
        &mut viewer,
        json!({
            "type": "score-update",
            "payload": {
                "matchId": ghost_match.to_string(),
                "scoreHome": 2,
                "scoreAway": 2
            }
        }),
    )
    .await;

    assert!(next_text(&mut viewer, 2).await.is_none());
}

#[tokio::test]
async fn subscribing_twice_does_not_duplicate_broadcasts() {
    let app = spawn_app().await;
    let (_username, token) = create_test_user_and_login(&app.address).await;
    let match_id = create_match(&app, &token, "football").await;

    let mut viewer = connect_live_ws(&app.address, Some(&token)).await;
    subscribe(&mut viewer, match_id).await;
    subscribe(&mut viewer, match_id).await;
    wait_for_room_subscribers(match_id, 1).await;

    send_command(
        &mut viewer,
        json!({
            "type": "score-update",
            "payload": {
                "matchId": match_id.to_string(),
                "scoreHome": 1,
                "scoreAway": 0
            }
        }),
    )
    .await;

    let update = expect_json(&mut viewer, 5, "match-update broadcast").await;
    assert_eq!(update["match"]["score_home"], 1);
    // The second subscribe was a no-op, so there is no duplicate delivery.
    assert!(next_text(&mut viewer, 1).await.is_none());
}

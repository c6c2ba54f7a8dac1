use serde_json::json;
use uuid::Uuid;

mod common;
use common::fixtures::create_league;
use common::utils::{create_test_user_and_login, spawn_app};

#[tokio::test]
async fn league_crud_round_trip() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let (_username, token) = create_test_user_and_login(&app.address).await;

    // Create
    let response = client
        .post(&format!("{}/leagues", &app.address))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Liga Norte",
            "sport": "handball",
            "season": "2025/26"
        }))
        .send()
        .await
        .expect("Failed to create league");
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["sport"], "handball");
    let league_id = body["data"]["id"].as_str().unwrap().to_string();

    // Read
    let response = client
        .get(&format!("{}/leagues/{}", &app.address, league_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to get league");
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Liga Norte");

    // List
    let response = client
        .get(&format!("{}/leagues", &app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to list leagues");
    let body: serde_json::Value = response.json().await.unwrap();
    let listed = body["data"].as_array().unwrap();
    assert!(listed.iter().any(|l| l["id"] == league_id.as_str()));

    // Update (patch semantics: untouched fields survive)
    let response = client
        .put(&format!("{}/leagues/{}", &app.address, league_id))
        .bearer_auth(&token)
        .json(&json!({ "season": "2026/27" }))
        .send()
        .await
        .expect("Failed to update league");
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["season"], "2026/27");
    assert_eq!(body["data"]["name"], "Liga Norte");

    // Delete
    let response = client
        .delete(&format!("{}/leagues/{}", &app.address, league_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to delete league");
    assert!(response.status().is_success());

    let response = client
        .get(&format!("{}/leagues/{}", &app.address, league_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to get league");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn create_league_rejects_blank_name() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let (_username, token) = create_test_user_and_login(&app.address).await;

    let response = client
        .post(&format!("{}/leagues", &app.address))
        .bearer_auth(&token)
        .json(&json!({ "name": "   ", "sport": "football" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn get_unknown_league_returns_404() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let (_username, token) = create_test_user_and_login(&app.address).await;

    let response = client
        .get(&format!("{}/leagues/{}", &app.address, Uuid::new_v4()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn fixture_helper_creates_a_league() {
    let app = spawn_app().await;
    let (_username, token) = create_test_user_and_login(&app.address).await;

    let league_id = create_league(&app, &token, "Liga Fixture").await;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leagues WHERE id = $1")
        .bind(league_id)
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to count leagues");
    assert_eq!(count, 1);
}

use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

use super::utils::TestApp;

/// Create a league via the API, returning its id.
pub async fn create_league(app: &TestApp, token: &str, name: &str) -> Uuid {
    let client = Client::new();
    let response = client
        .post(&format!("{}/leagues", &app.address))
        .bearer_auth(token)
        .json(&json!({
            "name": name,
            "sport": "football",
            "season": "2025/26"
        }))
        .send()
        .await
        .expect("Failed to create league");
    assert_eq!(response.status().as_u16(), 201, "League creation should succeed");

    let body: serde_json::Value = response.json().await.expect("Failed to parse league response");
    Uuid::parse_str(body["data"]["id"].as_str().expect("League id missing")).unwrap()
}

/// Create a club via the API, returning its id.
pub async fn create_club(
    app: &TestApp,
    token: &str,
    name: &str,
    sport: &str,
    league_id: Option<Uuid>,
) -> Uuid {
    let client = Client::new();
    let response = client
        .post(&format!("{}/clubs", &app.address))
        .bearer_auth(token)
        .json(&json!({
            "name": name,
            "sport": sport,
            "league_id": league_id
        }))
        .send()
        .await
        .expect("Failed to create club");
    assert_eq!(response.status().as_u16(), 201, "Club creation should succeed");

    let body: serde_json::Value = response.json().await.expect("Failed to parse club response");
    Uuid::parse_str(body["data"]["id"].as_str().expect("Club id missing")).unwrap()
}

/// Create a match between two fresh clubs, returning its id.
pub async fn create_match(app: &TestApp, token: &str, sport: &str) -> Uuid {
    let home_club = create_club(
        app,
        token,
        &format!("Home {}", Uuid::new_v4()),
        sport,
        None,
    )
    .await;
    let away_club = create_club(
        app,
        token,
        &format!("Away {}", Uuid::new_v4()),
        sport,
        None,
    )
    .await;

    let client = Client::new();
    let response = client
        .post(&format!("{}/matches", &app.address))
        .bearer_auth(token)
        .json(&json!({
            "sport": sport,
            "scheduled_at": chrono::Utc::now().to_rfc3339(),
            "home_club_id": home_club,
            "away_club_id": away_club
        }))
        .send()
        .await
        .expect("Failed to create match");
    assert_eq!(response.status().as_u16(), 201, "Match creation should succeed");

    let body: serde_json::Value = response.json().await.expect("Failed to parse match response");
    Uuid::parse_str(body["data"]["id"].as_str().expect("Match id missing")).unwrap()
}

/// Read the current score row of a match straight from the database.
pub async fn fetch_scores(app: &TestApp, match_id: Uuid) -> (i32, i32, String) {
    let row: (i32, i32, String) = sqlx::query_as(
        "SELECT score_home, score_away, status FROM matches WHERE id = $1",
    )
    .bind(match_id)
    .fetch_one(&app.db_pool)
    .await
    .expect("Failed to fetch match scores");
    row
}

/// Count persisted events for a match.
pub async fn count_events(app: &TestApp, match_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM match_events WHERE match_id = $1")
        .bind(match_id)
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to count match events")
}

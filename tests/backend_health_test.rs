mod common;
use common::utils::spawn_app;

#[tokio::test]
async fn backend_health_works() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/backend_health", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["status"], "ok");
}

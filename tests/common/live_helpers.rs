use futures_util::{SinkExt, StreamExt};
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use uuid::Uuid;

use ligalive_backend::config::settings::{get_config, get_redis_url};

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Open a live WebSocket connection, optionally with a bearer token in
/// the query string. Unauthenticated connections are accepted too.
pub async fn connect_live_ws(app_address: &str, token: Option<&str>) -> WsStream {
    let ws_base = app_address.replace("http", "ws");
    let ws_url = match token {
        Some(token) => format!("{}/live-ws?token={}", ws_base, token),
        None => format!("{}/live-ws", ws_base),
    };
    let request = ws_url.into_client_request().expect("Failed to build ws request");
    let (ws_stream, _) = connect_async(request)
        .await
        .expect("Failed to connect to live WebSocket");
    ws_stream
}

pub async fn send_command(ws: &mut WsStream, command: serde_json::Value) {
    ws.send(Message::Text(command.to_string()))
        .await
        .expect("Failed to send live command");
}

pub async fn subscribe(ws: &mut WsStream, match_id: Uuid) {
    send_command(
        ws,
        serde_json::json!({
            "type": "subscribe",
            "payload": { "matchId": match_id.to_string() }
        }),
    )
    .await;
}

/// Next text frame within `secs` seconds, skipping protocol frames.
/// Returns None on timeout.
pub async fn next_text(ws: &mut WsStream, secs: u64) -> Option<String> {
    let timeout = tokio::time::sleep(Duration::from_secs(secs));
    tokio::pin!(timeout);
    loop {
        tokio::select! {
            msg = ws.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => return Some(text),
                    Some(Ok(_)) => continue,
                    _ => return None,
                }
            }
            _ = &mut timeout => return None,
        }
    }
}

/// Next text frame parsed as JSON; panics on timeout.
pub async fn expect_json(ws: &mut WsStream, secs: u64, context: &str) -> serde_json::Value {
    let text = next_text(ws, secs)
        .await
        .unwrap_or_else(|| panic!("Timed out waiting for {}", context));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("Bad JSON for {}: {}", context, e))
}

pub fn test_redis_client() -> redis::Client {
    let configuration = get_config().expect("Failed to read configuration.");
    redis::Client::open(get_redis_url(&configuration).expose_secret())
        .expect("Failed to create Redis client")
}

/// Poll PUBSUB NUMSUB until the room channel reports at least `expected`
/// subscribers; joining is asynchronous, so tests wait for it before
/// publishing.
pub async fn wait_for_room_subscribers(match_id: Uuid, expected: i64) {
    let client = test_redis_client();
    let mut conn = client
        .get_async_connection()
        .await
        .expect("Failed to connect to Redis");
    let channel = format!("match:{}", match_id);

    for _ in 0..50 {
        let values: Vec<redis::Value> = redis::cmd("PUBSUB")
            .arg("NUMSUB")
            .arg(&channel)
            .query_async(&mut conn)
            .await
            .expect("PUBSUB NUMSUB failed");

        if values.len() >= 2 {
            if let redis::Value::Int(count) = &values[1] {
                if *count >= expected {
                    return;
                }
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("Timed out waiting for {} subscribers on {}", expected, channel);
}

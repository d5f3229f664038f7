//! Shared helpers for the integration tests.
//!
//! The real router is served in-process on an ephemeral port. socket.io is
//! spoken directly over the Engine.IO v4 websocket transport.

#![allow(dead_code)]

use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use hiroba_server::{
    infrastructure::{message_pusher::SocketIoMessagePusher, repository::InMemoryRoomRepository},
    ui::{Server, state::AppState},
};
use hiroba_shared::time::SystemClock;
use serde_json::{Value, json};
use tokio::{net::TcpStream, task::JoinHandle};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Helper struct to manage the in-process server lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub static_dir: PathBuf,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with an empty registry and a fresh static directory
    /// containing `index.html` and `app.js`
    pub async fn start() -> Self {
        let static_dir = std::env::temp_dir().join(format!("hiroba-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&static_dir).expect("Failed to create static dir");
        std::fs::write(static_dir.join("index.html"), "<html>hiroba</html>")
            .expect("Failed to write index.html");
        std::fs::write(static_dir.join("app.js"), "console.log('hiroba');")
            .expect("Failed to write app.js");

        let app_state = AppState::new(
            Arc::new(InMemoryRoomRepository::default()),
            Arc::new(SocketIoMessagePusher::default()),
            Arc::new(SystemClock),
        );
        let router = Server::new(app_state, static_dir.clone()).router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        TestServer {
            addr,
            static_dir,
            handle,
        }
    }

    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn socket_url(&self) -> String {
        format!("ws://{}/socket.io/?EIO=4&transport=websocket", self.addr)
    }

    /// `GET` a JSON endpoint
    pub async fn get_json(&self, path: &str) -> Value {
        reqwest::get(self.http_url(path))
            .await
            .expect("Request failed")
            .json()
            .await
            .expect("Invalid JSON")
    }

    /// Poll `GET path` until `condition` holds
    pub async fn wait_for_json(&self, path: &str, condition: impl Fn(&Value) -> bool) -> Value {
        for _ in 0..50 {
            let body = self.get_json(path).await;
            if condition(&body) {
                return body;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("Condition on {} not met in time", path);
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
        let _ = std::fs::remove_dir_all(&self.static_dir);
    }
}

/// Helper struct for one socket.io client connection
pub struct TestClient {
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
    /// Connection id assigned by the server (from `connection-ack`)
    pub id: String,
}

impl TestClient {
    /// Connect to the default namespace and wait for `connection-ack`
    pub async fn connect(server: &TestServer) -> Self {
        let (ws, _) = connect_async(server.socket_url())
            .await
            .expect("Failed to connect");
        let mut client = TestClient {
            ws,
            id: String::new(),
        };
        client.send_raw("40").await;

        let ack = client.expect_event("connection-ack").await;
        client.id = ack["socketId"]
            .as_str()
            .expect("socketId must be a string")
            .to_string();
        client
    }

    async fn send_raw(&mut self, frame: &str) {
        self.ws
            .send(Message::Text(frame.to_string().into()))
            .await
            .expect("Failed to send frame");
    }

    /// Emit an event with a payload
    pub async fn emit(&mut self, event: &str, data: Value) {
        let frame = format!("42{}", json!([event, data]));
        self.send_raw(&frame).await;
    }

    /// Emit an event without a payload
    pub async fn emit_empty(&mut self, event: &str) {
        let frame = format!("42{}", json!([event]));
        self.send_raw(&frame).await;
    }

    /// Join `room` and return the `room-state-sync` payload
    pub async fn join(&mut self, room: &str, name: &str) -> Value {
        self.emit(
            "join-room",
            json!({"roomId": room, "user": {"name": name, "avatar": "default"}}),
        )
        .await;
        self.expect_event("room-state-sync").await
    }

    /// Next socket.io event `(name, payload)`
    ///
    /// Engine.IO pings are answered and other packets are skipped.
    pub async fn next_event(&mut self) -> (String, Value) {
        loop {
            let message = tokio::time::timeout(RECV_TIMEOUT, self.ws.next())
                .await
                .expect("Timed out waiting for an event")
                .expect("Connection closed")
                .expect("WebSocket error");
            let Message::Text(text) = message else {
                continue;
            };
            let text = text.as_str();
            if text == "2" {
                self.send_raw("3").await;
                continue;
            }
            let Some(body) = text.strip_prefix("42") else {
                continue;
            };
            let packet: Vec<Value> = serde_json::from_str(body).expect("Invalid event packet");
            let name = packet[0].as_str().expect("Event name").to_string();
            let payload = packet.get(1).cloned().unwrap_or(Value::Null);
            return (name, payload);
        }
    }

    /// Skip events until `name` arrives and return its payload
    pub async fn expect_event(&mut self, name: &str) -> Value {
        loop {
            let (event, payload) = self.next_event().await;
            if event == name {
                return payload;
            }
        }
    }

    /// Close the transport without leaving the room
    pub async fn close(mut self) {
        let _ = self.ws.close(None).await;
    }
}

//! Helpers for end-to-end tests against an in-process relay server.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use kaiwa_server::{
    infrastructure::{
        dto::websocket::{ClientMessage, ServerMessage},
        message_pusher::WebSocketMessagePusher,
        repository::InMemoryChatRepository,
    },
    ui::{AppState, Server},
};
use kaiwa_shared::time::SystemClock;
use tokio::{net::TcpListener, sync::oneshot, time::timeout};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);
const SILENCE_WINDOW: Duration = Duration::from_millis(200);

/// Helper struct to manage server lifecycle
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    /// Start a test server on an ephemeral port
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let state = AppState::new(
            Arc::new(InMemoryChatRepository::new()),
            Arc::new(WebSocketMessagePusher::new()),
            Arc::new(SystemClock),
        );
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(Server::new(state).serve(listener, async move {
            let _ = shutdown_rx.await;
        }));

        TestServer {
            addr,
            shutdown: Some(shutdown_tx),
        }
    }

    /// Get the WebSocket URL for this server
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    /// Get the HTTP URL for the given path
    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Connect a client and consume the initial room list
    pub async fn connect(&self) -> TestClient {
        let mut client = self.connect_raw(&self.ws_url()).await;
        match client.recv().await {
            ServerMessage::Rooms { .. } => client,
            other => panic!("expected initial rooms, got {other:?}"),
        }
    }

    pub async fn connect_raw(&self, url: &str) -> TestClient {
        let (stream, _) = connect_async(url)
            .await
            .expect("Failed to connect to test server");
        TestClient { stream }
    }

    /// Connect and claim a username, consuming the replies
    pub async fn client_named(&self, username: &str) -> TestClient {
        let mut client = self.connect().await;
        client.set_username(username).await;
        client
            .recv_until(|m| matches!(m, ServerMessage::UsernameAccepted { .. }))
            .await;
        client
            .recv_until(|m| matches!(m, ServerMessage::Rooms { .. }))
            .await;
        client
    }

    /// Connect, claim a username and join a room, consuming the replies
    pub async fn client_in_room(&self, username: &str, room: &str) -> TestClient {
        let mut client = self.client_named(username).await;
        client.join_room(room).await;
        client
            .recv_until(|m| matches!(m, ServerMessage::Joined { .. }))
            .await;
        client
            .recv_until(|m| matches!(m, ServerMessage::Rooms { .. }))
            .await;
        client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Stop the server when the test ends
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

/// Helper struct wrapping a WebSocket connection
pub struct TestClient {
    stream: WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
}

impl TestClient {
    pub async fn send(&mut self, message: &ClientMessage) {
        let json = serde_json::to_string(message).expect("Failed to encode message");
        self.send_raw(&json).await;
    }

    pub async fn send_raw(&mut self, text: &str) {
        self.stream
            .send(Message::text(text))
            .await
            .expect("Failed to send frame");
    }

    pub async fn send_binary(&mut self, bytes: Vec<u8>) {
        self.stream
            .send(Message::binary(bytes))
            .await
            .expect("Failed to send frame");
    }

    pub async fn set_username(&mut self, username: &str) {
        self.send(&ClientMessage::SetUsername {
            username: username.to_string(),
        })
        .await;
    }

    pub async fn join_room(&mut self, room: &str) {
        self.send(&ClientMessage::JoinRoom {
            room: room.to_string(),
        })
        .await;
    }

    pub async fn send_text(&mut self, text: &str) {
        self.send(&ClientMessage::SendMessage {
            text: text.to_string(),
        })
        .await;
    }

    /// Receive the next server message
    pub async fn recv(&mut self) -> ServerMessage {
        loop {
            let frame = timeout(RECV_TIMEOUT, self.stream.next())
                .await
                .expect("Timed out waiting for a server message")
                .expect("Connection closed")
                .expect("WebSocket error");
            if let Message::Text(text) = frame {
                return serde_json::from_str(text.as_str()).expect("Invalid server message");
            }
        }
    }

    /// Receive messages until one matches, returning it
    pub async fn recv_until<F>(&mut self, predicate: F) -> ServerMessage
    where
        F: Fn(&ServerMessage) -> bool,
    {
        loop {
            let message = self.recv().await;
            if predicate(&message) {
                return message;
            }
        }
    }

    /// Assert that no message arrives within a short window
    pub async fn assert_silent(&mut self) {
        if let Ok(Some(Ok(Message::Text(text)))) = timeout(SILENCE_WINDOW, self.stream.next()).await
        {
            panic!("expected no message, got {}", text.as_str());
        }
    }

    pub async fn close(mut self) {
        let _ = self.stream.close(None).await;
    }
}

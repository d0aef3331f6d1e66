//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::SessionId,
    infrastructure::dto::websocket::ClientMessage,
    ui::state::AppState,
    usecase::RelayError,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// Every outbound message for this session (replies and broadcasts alike) goes
/// through the channel, so the socket sees them in enqueue order.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Register the session; it receives the room list right away
    let (tx, rx) = mpsc::unbounded_channel();
    let session_id = state.connect_session_usecase.execute(tx).await;

    let state_clone = state.clone();

    // Spawn a task to receive messages from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::debug!("WebSocket error on session '{}': {}", session_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_payload(&state_clone, session_id, text.as_str()).await;
                }
                Message::Binary(bytes) => match std::str::from_utf8(&bytes) {
                    Ok(text) => handle_payload(&state_clone, session_id, text).await,
                    Err(e) => {
                        tracing::debug!("Ignored non UTF-8 frame from '{}': {}", session_id, e);
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Session '{}' requested close", session_id);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    });

    // Spawn a task to send queued messages to this client
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state.disconnect_session_usecase.execute(session_id).await;
}

fn parse_client_message(payload: &str) -> Result<ClientMessage, RelayError> {
    serde_json::from_str(payload).map_err(|e| RelayError::MalformedInput(e.to_string()))
}

/// Dispatch one inbound payload to its use case.
///
/// Rejections have already been replied to the session by the use case;
/// malformed payloads are dropped without a reply.
async fn handle_payload(state: &AppState, session_id: SessionId, payload: &str) {
    let message = match parse_client_message(payload) {
        Ok(message) => message,
        Err(e) => {
            tracing::debug!("Ignored input from '{}': {}", session_id, e);
            return;
        }
    };

    let result = match message {
        ClientMessage::SetUsername { username } => state
            .claim_username_usecase
            .execute(session_id, &username)
            .await
            .map(|_| ()),
        ClientMessage::CreateRoom { room } => state
            .create_room_usecase
            .execute(session_id, &room)
            .await
            .map(|_| ()),
        ClientMessage::JoinRoom { room } => state
            .join_room_usecase
            .execute(session_id, &room)
            .await
            .map(|_| ()),
        ClientMessage::SendMessage { text } => state
            .send_message_usecase
            .execute(session_id, &text)
            .await
            .map(|_| ()),
        ClientMessage::Typing { is_typing } => {
            state
                .notify_typing_usecase
                .execute(session_id, is_typing)
                .await;
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!("Request from session '{}' rejected: {}", session_id, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_client_message_malformed() {
        // テスト項目: 解釈できない入力は MalformedInput になる
        // given (前提条件):
        let inputs = ["not json", "42", r#"{"username":"alice"}"#, r#"{"type":"dance"}"#];

        for input in inputs {
            // when (操作):
            let result = parse_client_message(input);

            // then (期待する結果):
            assert!(
                matches!(result, Err(RelayError::MalformedInput(_))),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_parse_client_message_join_room() {
        // テスト項目: join_room が解釈される
        // given (前提条件):
        let input = r#"{"type":"join_room","room":"Devs"}"#;

        // when (操作):
        let result = parse_client_message(input);

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(ClientMessage::JoinRoom {
                room: "Devs".to_string()
            })
        );
    }
}

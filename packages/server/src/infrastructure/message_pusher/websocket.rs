//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - セッションごとの `UnboundedSender` を管理
//! - `RelayEvent` を DTO（`ServerMessage`）経由で JSON に変換して送信
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、送信キューとして使用します。
//! 実際のソケットへの書き込みは UI 層の送信タスクが行うため、
//! ここでの送信がソケットの遅延で待たされることはありません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{MessagePushError, MessagePusher, PusherChannel, RelayEvent, SessionId},
    infrastructure::dto::websocket::ServerMessage,
};

/// WebSocket を使った MessagePusher 実装
pub struct WebSocketMessagePusher {
    /// 接続中のセッションの送信チャンネル
    clients: Mutex<HashMap<SessionId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// 接続中のクライアント数
    pub async fn client_count(&self) -> usize {
        self.clients.lock().await.len()
    }

    fn encode(event: &RelayEvent) -> Result<String, MessagePushError> {
        serde_json::to_string(&ServerMessage::from(event))
            .map_err(|e| MessagePushError::EncodeFailed(e.to_string()))
    }
}

impl Default for WebSocketMessagePusher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, session_id: SessionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(session_id, sender);
        tracing::debug!("Session '{}' registered to MessagePusher", session_id);
    }

    async fn unregister_client(&self, session_id: &SessionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(session_id);
        tracing::debug!("Session '{}' unregistered from MessagePusher", session_id);
    }

    async fn push_to(
        &self,
        session_id: &SessionId,
        event: &RelayEvent,
    ) -> Result<(), MessagePushError> {
        let content = Self::encode(event)?;
        let clients = self.clients.lock().await;

        if let Some(sender) = clients.get(session_id) {
            sender
                .send(content)
                .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
            tracing::debug!("Pushed message to session '{}'", session_id);
            Ok(())
        } else {
            Err(MessagePushError::ClientNotFound(session_id.to_string()))
        }
    }

    async fn broadcast(
        &self,
        targets: Vec<SessionId>,
        event: &RelayEvent,
    ) -> Result<(), MessagePushError> {
        if targets.is_empty() {
            return Ok(());
        }
        let content = Self::encode(event)?;
        let clients = self.clients.lock().await;

        for target in targets {
            if let Some(sender) = clients.get(&target) {
                // ブロードキャストでは一部の送信失敗を許容
                if let Err(e) = sender.send(content.clone()) {
                    tracing::warn!("Failed to push message to session '{}': {}", target, e);
                } else {
                    tracing::debug!("Broadcasted message to session '{}'", target);
                }
            } else {
                tracing::warn!("Session '{}' not found during broadcast, skipping", target);
            }
        }

        Ok(())
    }
}

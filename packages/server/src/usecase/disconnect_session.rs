//! UseCase: セッション切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectSessionUseCase::execute() メソッド
//! - セッションの削除、ルームからの退出、`user_left` と `rooms` の通知
//!
//! ### なぜこのテストが必要か
//! - 切断は接続の終わり方によらず必ず実行されるため、
//!   ルームに参加していないセッションや既に削除済みのセッションでも安全である必要がある
//!
//! ### どのような状況を想定しているか
//! - 正常系：ルーム参加中のセッションが切断（残りの参加者に `user_left`）
//! - 正常系：ルームに参加していないセッションの切断（`rooms` のみ）
//! - エッジケース：同じセッションの二重切断

use std::sync::Arc;

use crate::domain::{ChatRepository, MessagePusher, RelayEvent, Session, SessionId};

use super::notify::{broadcast_rooms, broadcast_to_room};

/// セッション切断のユースケース
pub struct DisconnectSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectSessionUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// セッションを削除する
    ///
    /// # Returns
    ///
    /// * `Some(Session)` - 削除したセッション（表示名と所属ルームを含む）
    /// * `None` - セッションが既に存在しない
    pub async fn execute(&self, session_id: SessionId) -> Option<Session> {
        let mut guard = self.repository.lock().await;
        let state = &mut *guard;

        self.message_pusher.unregister_client(&session_id).await;
        let session = state.sessions.unregister(&session_id)?;

        if let (Some(username), Some(room)) = (&session.username, &session.current_room) {
            state.rooms.leave(room.as_str(), username);
            let event = RelayEvent::UserLeft(username.clone());
            broadcast_to_room(state, self.message_pusher.as_ref(), room, &event).await;
        }

        broadcast_rooms(state, self.message_pusher.as_ref()).await;

        tracing::info!("Session '{}' disconnected", session_id);
        Some(session)
    }
}

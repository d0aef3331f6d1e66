//! UseCase: 入力中通知の中継
//!
//! 入力中通知は状態を変更しない。ルームに参加していないセッションからの通知は黙って破棄する。

use std::sync::Arc;

use crate::domain::{ChatRepository, MessagePusher, RelayEvent, Session, SessionId};

use super::notify::broadcast_to_room;

/// 入力中通知のユースケース
pub struct NotifyTypingUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl NotifyTypingUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 入力中通知を送信者の所属ルームに中継する
    ///
    /// 中継した場合は `true` を返す。
    pub async fn execute(&self, session_id: SessionId, is_typing: bool) -> bool {
        let state = self.repository.lock().await;

        let Some(Session {
            username: Some(username),
            current_room: Some(room),
            ..
        }) = state.sessions.get(&session_id)
        else {
            tracing::debug!("Ignored typing from session '{}' outside a room", session_id);
            return false;
        };

        let event = RelayEvent::Typing {
            username: username.clone(),
            is_typing,
        };
        broadcast_to_room(&state, self.message_pusher.as_ref(), room, &event).await;
        true
    }
}

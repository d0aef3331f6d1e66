//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - メッセージの生成（サーバー時刻）、履歴への追加、ルーム参加者へのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 履歴は 200 件で打ち切られ、古いものから捨てられることを保証する
//! - 本文は加工せずにそのまま中継されることを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：送信者を含むルーム参加者全員に `message` が届く
//! - 異常系：ルーム未参加（送信元のみに `error`）
//! - エッジケース：空白のみの本文は何もせずに破棄
//! - エッジケース：201 件目の送信で最古のメッセージが捨てられる（シナリオ C）

use std::sync::Arc;

use kaiwa_shared::time::Clock;

use crate::domain::{
    ChatMessage, ChatRepository, MessageIdFactory, MessagePusher, MessageText, RelayEvent,
    Session, SessionId, Timestamp,
};

use super::{
    error::{ROOM_REQUIRED_TO_SEND, RelayError, reply_error},
    notify::broadcast_to_room,
};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// メッセージの時刻を決める時計
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    pub fn new(
        repository: Arc<dyn ChatRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ChatMessage))` - 履歴に追加し、ルームにブロードキャストしたメッセージ
    /// * `Ok(None)` - 本文が空のため破棄した
    /// * `Err(RelayError)` - 送信元がルームに参加していない
    pub async fn execute(
        &self,
        session_id: SessionId,
        raw_text: &str,
    ) -> Result<Option<ChatMessage>, RelayError> {
        let mut guard = self.repository.lock().await;
        let state = &mut *guard;
        let pusher = self.message_pusher.as_ref();

        let (username, room) = match state.sessions.get(&session_id) {
            None => return Err(RelayError::SessionNotFound(session_id.to_string())),
            Some(Session {
                username: Some(username),
                current_room: Some(room),
                ..
            }) => (username.clone(), room.clone()),
            Some(_) => {
                let error = RelayError::PreconditionNotMet(ROOM_REQUIRED_TO_SEND);
                return Err(reply_error(pusher, &session_id, error).await);
            }
        };

        let Ok(text) = MessageText::new(raw_text) else {
            tracing::debug!("Dropped empty message from '{}'", username);
            return Ok(None);
        };

        let message = ChatMessage::new(
            MessageIdFactory::generate(),
            username,
            text,
            Timestamp::new(self.clock.now_millis()),
        );
        state.rooms.append_message(room.as_str(), message.clone());

        let event = RelayEvent::Message(message.clone());
        broadcast_to_room(state, pusher, &room, &event).await;

        tracing::debug!("'{}' sent a message to room '{}'", message.username, room);
        Ok(Some(message))
    }
}

//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - 参加前の検証（表示名 → ルームの存在）、ルームの移動、履歴の返却
//!
//! ### なぜこのテストが必要か
//! - 参加はセッションとルームの両方を変更する唯一の操作であり、
//!   「所属ルームの参加者に自分の表示名が含まれる」という不変条件を保つ必要がある
//!
//! ### どのような状況を想定しているか
//! - 正常系：初めての参加、別のルームへの移動、既定ルームへの参加（ルーム名省略）
//! - 正常系：同じルームへの再参加（何も変わらず `joined` のみ返す）
//! - 異常系：表示名がない、ルームが存在しない（状態は変更しない）
//! - 正常系：履歴は直近 100 件

use std::sync::Arc;

use crate::domain::{ChatRepository, DEFAULT_ROOM, MessagePusher, RelayEvent, RoomName, SessionId};

use super::{
    error::{RelayError, USERNAME_REQUIRED_TO_JOIN, reply_error},
    notify::{broadcast_rooms, broadcast_to_room, push_to_session},
};

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ルーム参加を実行
    ///
    /// `raw_room` が空の場合は既定のルームに参加する。
    /// 別のルームに参加中であれば、そのルームから退出してから参加する。
    pub async fn execute(
        &self,
        session_id: SessionId,
        raw_room: &str,
    ) -> Result<RoomName, RelayError> {
        let mut guard = self.repository.lock().await;
        let state = &mut *guard;
        let pusher = self.message_pusher.as_ref();

        let room_name = match raw_room.trim() {
            "" => DEFAULT_ROOM,
            trimmed => trimmed,
        };

        let session = state
            .sessions
            .get(&session_id)
            .ok_or_else(|| RelayError::SessionNotFound(session_id.to_string()))?;
        let Some(username) = session.username.clone() else {
            let error = RelayError::PreconditionNotMet(USERNAME_REQUIRED_TO_JOIN);
            return Err(reply_error(pusher, &session_id, error).await);
        };
        let previous = session.current_room.clone();

        let joined = match state.rooms.join(room_name, &username) {
            Ok(joined) => joined,
            Err(e) => return Err(reply_error(pusher, &session_id, e.into()).await),
        };
        let room = joined.room;
        let history = RelayEvent::Joined {
            room: room.clone(),
            history: joined.history,
        };

        // 同じルームへの再参加
        if previous.as_ref() == Some(&room) {
            push_to_session(pusher, &session_id, &history).await;
            tracing::debug!("Session '{}' rejoined room '{}'", session_id, room);
            return Ok(room);
        }

        if let Some(previous) = &previous {
            state.rooms.leave(previous.as_str(), &username);
        }
        state
            .sessions
            .set_current_room(&session_id, room.clone())?;

        if let Some(previous) = &previous {
            let left = RelayEvent::UserLeft(username.clone());
            broadcast_to_room(state, pusher, previous, &left).await;
        }
        push_to_session(pusher, &session_id, &history).await;
        let user_joined = RelayEvent::UserJoined(username.clone());
        broadcast_to_room(state, pusher, &room, &user_joined).await;
        broadcast_rooms(state, pusher).await;

        tracing::info!("'{}' joined room '{}'", username, room);
        Ok(room)
    }
}

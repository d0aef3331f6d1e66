//! UseCase 層のエラー定義
//!
//! `Display` の文字列はそのままクライアントへの返信（`error` / `username_rejected`）に使われます。

use thiserror::Error;

use crate::domain::{MessagePusher, RelayEvent, RoomError, SessionError, SessionId};

pub const USERNAME_ALREADY_SET: &str = "Username already set.";
pub const USERNAME_REQUIRED_TO_JOIN: &str = "Set a username before joining.";
pub const ROOM_REQUIRED_TO_SEND: &str = "Join a room and set username first.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("Username required.")]
    InvalidUsername,

    #[error("Username already in use.")]
    UsernameTaken,

    #[error("Room name required.")]
    InvalidRoomName,

    #[error("Room already exists.")]
    RoomExists,

    #[error("Room not found.")]
    RoomNotFound,

    /// 現在のセッション状態では実行できない操作
    #[error("{0}")]
    PreconditionNotMet(&'static str),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// 切断処理と競合した場合など、セッションが既に存在しない
    #[error("session '{0}' not found")]
    SessionNotFound(String),
}

impl RelayError {
    /// 送信元セッションへの返信イベント（返信しないエラーは `None`）
    pub fn reply_event(&self) -> Option<RelayEvent> {
        match self {
            RelayError::InvalidUsername
            | RelayError::UsernameTaken
            | RelayError::PreconditionNotMet(USERNAME_ALREADY_SET) => {
                Some(RelayEvent::UsernameRejected(self.to_string()))
            }
            RelayError::InvalidRoomName
            | RelayError::RoomExists
            | RelayError::RoomNotFound
            | RelayError::PreconditionNotMet(_) => Some(RelayEvent::Error(self.to_string())),
            RelayError::MalformedInput(_) | RelayError::SessionNotFound(_) => None,
        }
    }
}

impl From<SessionError> for RelayError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::SessionNotFound(id) => RelayError::SessionNotFound(id),
            SessionError::InvalidUsername(_) => RelayError::InvalidUsername,
            SessionError::UsernameTaken(_) => RelayError::UsernameTaken,
            SessionError::UsernameAlreadySet(_) => {
                RelayError::PreconditionNotMet(USERNAME_ALREADY_SET)
            }
        }
    }
}

impl From<RoomError> for RelayError {
    fn from(error: RoomError) -> Self {
        match error {
            RoomError::InvalidName(_) => RelayError::InvalidRoomName,
            RoomError::RoomExists(_) => RelayError::RoomExists,
            RoomError::RoomNotFound(_) => RelayError::RoomNotFound,
        }
    }
}

/// エラーを送信元セッションに返信し、そのまま返す
///
/// 返信の失敗はログに残すのみで、呼び出し元には元のエラーを返す。
pub(crate) async fn reply_error(
    message_pusher: &dyn MessagePusher,
    session_id: &SessionId,
    error: RelayError,
) -> RelayError {
    if let Some(event) = error.reply_event()
        && let Err(e) = message_pusher.push_to(session_id, &event).await
    {
        tracing::warn!("Failed to reply error to session '{}': {}", session_id, e);
    }
    error
}

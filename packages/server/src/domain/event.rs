//! クライアントへ通知するイベント
//!
//! UseCase はこのイベントを組み立てて MessagePusher に渡します。
//! ワイヤ形式（JSON）への変換は Infrastructure 層の DTO が担当します。

use super::{
    entity::{ChatMessage, RoomSummary},
    value_object::{RoomName, Username},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayEvent {
    /// ルーム一覧（参加者数付き）
    Rooms(Vec<RoomSummary>),
    UsernameAccepted(Username),
    UsernameRejected(String),
    /// 入室完了（直近の履歴付き）
    Joined {
        room: RoomName,
        history: Vec<ChatMessage>,
    },
    UserJoined(Username),
    UserLeft(Username),
    Message(ChatMessage),
    Typing {
        username: Username,
        is_typing: bool,
    },
    Error(String),
}

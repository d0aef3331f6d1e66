//! UseCase 共通の通知ヘルパー
//!
//! いずれも `ChatState` のロックを保持した状態で呼び出すこと。
//! 通知の失敗はログに残すのみで、状態変更を取り消すことはない。

use crate::domain::{ChatState, MessagePusher, RelayEvent, RoomName, SessionId};

/// 特定のセッションに送信
pub(crate) async fn push_to_session(
    message_pusher: &dyn MessagePusher,
    session_id: &SessionId,
    event: &RelayEvent,
) {
    if let Err(e) = message_pusher.push_to(session_id, event).await {
        tracing::warn!("Failed to push to session '{}': {}", session_id, e);
    }
}

/// ルームに所属する全セッションに送信
pub(crate) async fn broadcast_to_room(
    state: &ChatState,
    message_pusher: &dyn MessagePusher,
    room: &RoomName,
    event: &RelayEvent,
) {
    let targets = state.sessions.sessions_in_room(room);
    if let Err(e) = message_pusher.broadcast(targets, event).await {
        tracing::warn!("Failed to broadcast to room '{}': {}", room, e);
    }
}

/// 全セッションに最新のルーム一覧を送信
pub(crate) async fn broadcast_rooms(state: &ChatState, message_pusher: &dyn MessagePusher) {
    let event = RelayEvent::Rooms(state.rooms.list_rooms());
    if let Err(e) = message_pusher
        .broadcast(state.sessions.all_session_ids(), &event)
        .await
    {
        tracing::warn!("Failed to broadcast room list: {}", e);
    }
}

//! UseCase: ルーム作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateRoomUseCase::execute() メソッド
//! - ルーム名の正規化、重複の拒否、全セッションへの `rooms` 通知
//!
//! ### どのような状況を想定しているか
//! - 正常系：表示名を持たないセッションでも作成できる
//! - 異常系：空のルーム名、既存のルーム名（送信元のみに `error`）
//! - エッジケース：大文字小文字だけが異なるルーム名は別のルーム

use std::sync::Arc;

use crate::domain::{ChatRepository, MessagePusher, RoomName, SessionId};

use super::{
    error::{RelayError, reply_error},
    notify::broadcast_rooms,
};

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl CreateRoomUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ルーム作成を実行
    ///
    /// 作成に成功した場合のみ全セッションにルーム一覧を送信する。
    pub async fn execute(
        &self,
        session_id: SessionId,
        raw_name: &str,
    ) -> Result<RoomName, RelayError> {
        let mut state = self.repository.lock().await;

        let room = match state.rooms.create_room(raw_name) {
            Ok(room) => room,
            Err(e) => {
                return Err(
                    reply_error(self.message_pusher.as_ref(), &session_id, e.into()).await,
                );
            }
        };

        broadcast_rooms(&state, self.message_pusher.as_ref()).await;

        tracing::info!("Room '{}' created by session '{}'", room, session_id);
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::dto::websocket::{RoomInfo, ServerMessage};
    use crate::usecase::test_support::Fixture;

    #[tokio::test]
    async fn test_create_room_broadcasts_rooms_to_everyone() {
        // テスト項目: ルームを作成すると全セッションに作成順のルーム一覧が届く
        // given (前提条件):
        let fixture = Fixture::new();
        let mut creator = fixture.connect().await;
        let mut other = fixture.in_room("bob", "General").await;
        creator.drain();
        other.drain();

        // when (操作):
        let result = fixture
            .create_room
            .execute(creator.session_id, "  Devs ")
            .await;

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "Devs");
        let expected = ServerMessage::Rooms {
            rooms: vec![
                RoomInfo {
                    name: "General".to_string(),
                    users: 1,
                },
                RoomInfo {
                    name: "Devs".to_string(),
                    users: 0,
                },
            ],
        };
        assert_eq!(creator.drain(), vec![expected.clone()]);
        assert_eq!(other.drain(), vec![expected]);
    }

    #[tokio::test]
    async fn test_create_room_empty_name() {
        // テスト項目: 空白のみのルーム名は送信元にのみ error を返す
        // given (前提条件):
        let fixture = Fixture::new();
        let mut creator = fixture.connect().await;
        let mut other = fixture.connect().await;
        creator.drain();
        other.drain();

        // when (操作):
        let result = fixture.create_room.execute(creator.session_id, " ").await;

        // then (期待する結果):
        assert_eq!(result, Err(RelayError::InvalidRoomName));
        assert_eq!(
            creator.drain(),
            vec![ServerMessage::Error {
                message: "Room name required.".to_string()
            }]
        );
        assert!(other.drain().is_empty());
    }

    #[tokio::test]
    async fn test_create_room_duplicate() {
        // テスト項目: 既存のルーム名は拒否され、ルーム一覧は変わらない
        // given (前提条件):
        let fixture = Fixture::new();
        let mut creator = fixture.connect().await;
        creator.drain();

        // when (操作):
        let result = fixture
            .create_room
            .execute(creator.session_id, "General")
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(RelayError::RoomExists));
        assert_eq!(
            creator.drain(),
            vec![ServerMessage::Error {
                message: "Room already exists.".to_string()
            }]
        );
        assert_eq!(fixture.repository.lock().await.rooms.len(), 1);
    }

    #[tokio::test]
    async fn test_create_room_is_case_sensitive() {
        // テスト項目: 大文字小文字だけが異なるルーム名は別のルームとして作成できる
        // given (前提条件):
        let fixture = Fixture::new();
        let creator = fixture.connect().await;

        // when (操作):
        let result = fixture
            .create_room
            .execute(creator.session_id, "general")
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(fixture.repository.lock().await.rooms.len(), 2);
    }

    #[tokio::test]
    async fn test_create_room_truncated_to_40_chars() {
        // テスト項目: 40 文字を超えるルーム名は切り詰められる
        // given (前提条件):
        let fixture = Fixture::new();
        let creator = fixture.connect().await;
        let long_name = "r".repeat(50);

        // when (操作):
        let result = fixture
            .create_room
            .execute(creator.session_id, &long_name)
            .await;

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "r".repeat(40));
    }
}

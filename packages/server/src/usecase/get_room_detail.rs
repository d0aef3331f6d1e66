//! UseCase: ルーム詳細取得処理

use std::sync::Arc;

use crate::domain::{ChatRepository, Room};

use super::error::RelayError;

/// ルーム詳細取得のユースケース
pub struct GetRoomDetailUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
}

impl GetRoomDetailUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// ルームのスナップショットを返す
    ///
    /// # Errors
    ///
    /// ルームが存在しない場合は `RelayError::RoomNotFound`
    pub async fn execute(&self, room_name: &str) -> Result<Room, RelayError> {
        self.repository
            .lock()
            .await
            .rooms
            .get(room_name)
            .cloned()
            .ok_or(RelayError::RoomNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Username;
    use crate::infrastructure::repository::InMemoryChatRepository;

    #[tokio::test]
    async fn test_get_room_detail_success() {
        // テスト項目: 存在するルームの参加者を取得できる
        // given (前提条件):
        let repository = Arc::new(InMemoryChatRepository::new());
        let alice = Username::new("alice").unwrap();
        repository
            .lock()
            .await
            .rooms
            .join("General", &alice)
            .unwrap();
        let usecase = GetRoomDetailUseCase::new(repository);

        // when (操作):
        let room = usecase.execute("General").await.unwrap();

        // then (期待する結果):
        assert_eq!(room.name.as_str(), "General");
        assert!(room.has_member(&alice));
    }

    #[tokio::test]
    async fn test_get_room_detail_not_found() {
        // テスト項目: 存在しないルームは RoomNotFound を返す
        // given (前提条件):
        let usecase = GetRoomDetailUseCase::new(Arc::new(InMemoryChatRepository::new()));

        // when (操作):
        let result = usecase.execute("Nowhere").await;

        // then (期待する結果):
        assert_eq!(result, Err(RelayError::RoomNotFound));
    }
}

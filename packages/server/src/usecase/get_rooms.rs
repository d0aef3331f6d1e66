//! UseCase: ルーム一覧取得処理

use std::sync::Arc;

use crate::domain::{ChatRepository, RoomSummary};

/// ルーム一覧取得のユースケース
pub struct GetRoomsUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
}

impl GetRoomsUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// 作成順のルーム一覧（参加者数付き）を返す
    pub async fn execute(&self) -> Vec<RoomSummary> {
        self.repository.lock().await.rooms.list_rooms()
    }
}

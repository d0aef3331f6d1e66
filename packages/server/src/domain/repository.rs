//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! ## 排他制御
//!
//! SessionRegistry と RoomDirectory は 1 つの `ChatState` にまとめ、単一のロックで保護します。
//! UseCase はロックを保持したまま「検証 → 状態変更 → 通知のキューイング」を行うため、
//! 表示名の一意性チェックやルーム作成の重複チェックは原子的に行われ、
//! 同一ルームへの通知順序は状態変更の順序と一致します。

use async_trait::async_trait;
use tokio::sync::MutexGuard;

use super::{room_directory::RoomDirectory, session_registry::SessionRegistry};

/// リレーが保持する全ての共有状態
#[derive(Debug)]
pub struct ChatState {
    pub sessions: SessionRegistry,
    pub rooms: RoomDirectory,
}

impl ChatState {
    /// セッションなし、既定のルームのみの状態を作成
    pub fn new() -> Self {
        Self {
            sessions: SessionRegistry::new(),
            rooms: RoomDirectory::with_default_room(),
        }
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

/// Chat Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// 共有状態の排他ロックを取得
    async fn lock(&self) -> MutexGuard<'_, ChatState>;
}

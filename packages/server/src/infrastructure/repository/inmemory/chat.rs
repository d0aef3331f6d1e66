//! InMemory Chat Repository 実装
//!
//! ドメイン層が定義する ChatRepository trait の具体的な実装。
//! `ChatState`（SessionRegistry + RoomDirectory）を 1 つの Mutex で保護し、
//! インメモリ DB として使用します。

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::{ChatRepository, ChatState};

/// インメモリ Chat Repository 実装
pub struct InMemoryChatRepository {
    state: Mutex<ChatState>,
}

impl InMemoryChatRepository {
    /// 既定のルーム（"General"）のみを持つ Repository を作成
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ChatState::new()),
        }
    }
}

impl Default for InMemoryChatRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn lock(&self) -> MutexGuard<'_, ChatState> {
        self.state.lock().await
    }
}

//! UseCase: 表示名の取得処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ClaimUsernameUseCase::execute() メソッド
//! - 表示名の正規化、一意性（大文字小文字を区別しない）、二重取得の拒否
//!
//! ### なぜこのテストが必要か
//! - 表示名はルームの参加者ハンドルとして使われるため、一意性が崩れると
//!   参加者管理が壊れる
//! - 並行して同じ表示名を要求された場合でも 1 つだけが成功することを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：取得成功（本人に `username_accepted`、全員に `rooms`）
//! - 異常系：空の表示名、使用中の表示名、取得済みセッションからの再要求
//! - 異常系：通知に失敗しても表示名の取得自体は成功する
//! - 並行性：大文字小文字だけが異なる表示名の同時要求

use std::sync::Arc;

use crate::domain::{ChatRepository, MessagePusher, RelayEvent, SessionId, Username};

use super::{
    error::{RelayError, reply_error},
    notify::{broadcast_rooms, push_to_session},
};

/// 表示名取得のユースケース
pub struct ClaimUsernameUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ClaimUsernameUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 表示名の取得を実行
    ///
    /// 失敗した場合は送信元に `username_rejected` を返信し、状態は変更しない。
    pub async fn execute(
        &self,
        session_id: SessionId,
        proposed: &str,
    ) -> Result<Username, RelayError> {
        let mut state = self.repository.lock().await;

        let username = match state.sessions.claim_username(&session_id, proposed) {
            Ok(username) => username,
            Err(e) => {
                return Err(
                    reply_error(self.message_pusher.as_ref(), &session_id, e.into()).await,
                );
            }
        };

        let accepted = RelayEvent::UsernameAccepted(username.clone());
        push_to_session(self.message_pusher.as_ref(), &session_id, &accepted).await;
        broadcast_rooms(&state, self.message_pusher.as_ref()).await;

        tracing::info!("Session '{}' is now known as '{}'", session_id, username);
        Ok(username)
    }
}

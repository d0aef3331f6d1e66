//! UseCase: セッション接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectSessionUseCase::execute() メソッド
//! - セッションの登録と、新しいセッションへのルーム一覧の送信
//!
//! ### どのような状況を想定しているか
//! - 正常系：接続直後に `rooms` を 1 件だけ受信する
//! - 正常系：既存セッションには何も通知されない

use std::sync::Arc;

use crate::domain::{ChatRepository, MessagePusher, PusherChannel, RelayEvent, SessionId};

use super::notify::push_to_session;

/// セッション接続のユースケース
pub struct ConnectSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectSessionUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// セッションを登録し、送信チャンネルを MessagePusher に登録する
    ///
    /// 登録直後に、新しいセッションへ現在のルーム一覧を送信する。
    pub async fn execute(&self, sender: PusherChannel) -> SessionId {
        let mut state = self.repository.lock().await;
        let session_id = state.sessions.register();
        self.message_pusher
            .register_client(session_id, sender)
            .await;

        let rooms = RelayEvent::Rooms(state.rooms.list_rooms());
        push_to_session(self.message_pusher.as_ref(), &session_id, &rooms).await;

        tracing::info!("Session '{}' connected", session_id);
        session_id
    }
}

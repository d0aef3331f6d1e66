//! MessagePusher trait 定義
//!
//! クライアントへのメッセージ通知のインターフェースです。
//! 具体的な実装（WebSocket など）は Infrastructure 層が提供します。
//!
//! 通知は送りっぱなし（best-effort）です。ある宛先への送信失敗が
//! 他の宛先への送信や、通知のきっかけとなった状態変更に影響することはありません。

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use super::{event::RelayEvent, value_object::SessionId};

/// クライアントごとの送信チャンネル（シリアライズ済みの JSON 文字列を流す）
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("client '{0}' not found")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),

    #[error("failed to encode event: {0}")]
    EncodeFailed(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// クライアントの送信チャンネルを登録
    async fn register_client(&self, session_id: SessionId, sender: PusherChannel);

    /// クライアントの送信チャンネルを登録解除
    async fn unregister_client(&self, session_id: &SessionId);

    /// 特定のクライアントに送信
    async fn push_to(
        &self,
        session_id: &SessionId,
        event: &RelayEvent,
    ) -> Result<(), MessagePushError>;

    /// 複数のクライアントに送信（一部の宛先への送信失敗は許容する）
    async fn broadcast(
        &self,
        targets: Vec<SessionId>,
        event: &RelayEvent,
    ) -> Result<(), MessagePushError>;
}

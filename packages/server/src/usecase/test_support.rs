//! UseCase テスト用の共通フィクスチャ
//!
//! 実際の InMemoryChatRepository と WebSocketMessagePusher を使い、
//! セッションごとの受信チャンネルから送信された JSON を取り出して検証する。

use std::sync::Arc;

use kaiwa_shared::time::FixedClock;
use tokio::sync::mpsc;

use crate::{
    domain::{ChatRepository, SessionId},
    infrastructure::{
        dto::websocket::ServerMessage, message_pusher::WebSocketMessagePusher,
        repository::InMemoryChatRepository,
    },
};

use super::{
    ClaimUsernameUseCase, ConnectSessionUseCase, CreateRoomUseCase, DisconnectSessionUseCase,
    JoinRoomUseCase, NotifyTypingUseCase, SendMessageUseCase,
};

/// テストで使う固定時刻（2023-01-01T00:00:00.000Z）
pub const FIXED_TIME: i64 = 1672531200000;

pub struct TestClient {
    pub session_id: SessionId,
    rx: mpsc::UnboundedReceiver<String>,
}

impl TestClient {
    /// これまでに受信したメッセージを全て取り出す
    pub fn drain(&mut self) -> Vec<ServerMessage> {
        let mut messages = Vec::new();
        while let Ok(raw) = self.rx.try_recv() {
            messages.push(serde_json::from_str(&raw).unwrap());
        }
        messages
    }
}

pub struct Fixture {
    pub repository: Arc<InMemoryChatRepository>,
    pub pusher: Arc<WebSocketMessagePusher>,
    pub connect: ConnectSessionUseCase,
    pub disconnect: DisconnectSessionUseCase,
    pub claim_username: ClaimUsernameUseCase,
    pub create_room: CreateRoomUseCase,
    pub join_room: JoinRoomUseCase,
    pub send_message: SendMessageUseCase,
    pub notify_typing: NotifyTypingUseCase,
}

impl Fixture {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryChatRepository::new());
        let pusher = Arc::new(WebSocketMessagePusher::new());
        let clock = Arc::new(FixedClock::new(FIXED_TIME));
        Self {
            connect: ConnectSessionUseCase::new(repository.clone(), pusher.clone()),
            disconnect: DisconnectSessionUseCase::new(repository.clone(), pusher.clone()),
            claim_username: ClaimUsernameUseCase::new(repository.clone(), pusher.clone()),
            create_room: CreateRoomUseCase::new(repository.clone(), pusher.clone()),
            join_room: JoinRoomUseCase::new(repository.clone(), pusher.clone()),
            send_message: SendMessageUseCase::new(repository.clone(), pusher.clone(), clock),
            notify_typing: NotifyTypingUseCase::new(repository.clone(), pusher.clone()),
            repository,
            pusher,
        }
    }

    /// 接続のみ（Anonymous）
    pub async fn connect(&self) -> TestClient {
        let (tx, rx) = mpsc::unbounded_channel();
        let session_id = self.connect.execute(tx).await;
        TestClient { session_id, rx }
    }

    /// 接続して表示名を取得（Named）
    pub async fn named(&self, username: &str) -> TestClient {
        let client = self.connect().await;
        self.claim_username
            .execute(client.session_id, username)
            .await
            .unwrap();
        client
    }

    /// 接続して表示名を取得し、ルームに参加（InRoom）
    pub async fn in_room(&self, username: &str, room: &str) -> TestClient {
        let client = self.named(username).await;
        self.join_room
            .execute(client.session_id, room)
            .await
            .unwrap();
        client
    }

    /// ルームの参加者名（ソート済み）
    pub async fn members_of(&self, room: &str) -> Vec<String> {
        let state = self.repository.lock().await;
        let mut members: Vec<String> = state
            .rooms
            .get(room)
            .map(|room| {
                room.members
                    .iter()
                    .map(|username| username.as_str().to_string())
                    .collect()
            })
            .unwrap_or_default();
        members.sort();
        members
    }
}

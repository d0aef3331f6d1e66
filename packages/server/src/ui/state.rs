//! Shared application state.

use std::sync::Arc;

use kaiwa_shared::time::Clock;

use crate::{
    domain::{ChatRepository, MessagePusher},
    usecase::{
        ClaimUsernameUseCase, ConnectSessionUseCase, CreateRoomUseCase, DisconnectSessionUseCase,
        GetRoomDetailUseCase, GetRoomsUseCase, JoinRoomUseCase, NotifyTypingUseCase,
        SendMessageUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// ConnectSessionUseCase（セッション接続のユースケース）
    pub connect_session_usecase: Arc<ConnectSessionUseCase>,
    /// DisconnectSessionUseCase（セッション切断のユースケース）
    pub disconnect_session_usecase: Arc<DisconnectSessionUseCase>,
    /// ClaimUsernameUseCase（表示名取得のユースケース）
    pub claim_username_usecase: Arc<ClaimUsernameUseCase>,
    /// CreateRoomUseCase（ルーム作成のユースケース）
    pub create_room_usecase: Arc<CreateRoomUseCase>,
    /// JoinRoomUseCase（ルーム参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// SendMessageUseCase（メッセージ送信のユースケース）
    pub send_message_usecase: Arc<SendMessageUseCase>,
    /// NotifyTypingUseCase（入力中通知のユースケース）
    pub notify_typing_usecase: Arc<NotifyTypingUseCase>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（ルーム詳細取得のユースケース）
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
}

impl AppState {
    /// Repository・MessagePusher・Clock から全ての UseCase を組み立てる
    pub fn new(
        repository: Arc<dyn ChatRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            connect_session_usecase: Arc::new(ConnectSessionUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            disconnect_session_usecase: Arc::new(DisconnectSessionUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            claim_username_usecase: Arc::new(ClaimUsernameUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            create_room_usecase: Arc::new(CreateRoomUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            join_room_usecase: Arc::new(JoinRoomUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            send_message_usecase: Arc::new(SendMessageUseCase::new(
                repository.clone(),
                message_pusher.clone(),
                clock,
            )),
            notify_typing_usecase: Arc::new(NotifyTypingUseCase::new(
                repository.clone(),
                message_pusher,
            )),
            get_rooms_usecase: Arc::new(GetRoomsUseCase::new(repository.clone())),
            get_room_detail_usecase: Arc::new(GetRoomDetailUseCase::new(repository)),
        }
    }
}

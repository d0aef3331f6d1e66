//! UseCase layer.
//!
//! One use case per protocol operation. Each use case holds the shared
//! repository lock while it validates, mutates and enqueues its notifications.

pub mod claim_username;
pub mod connect_session;
pub mod create_room;
pub mod disconnect_session;
pub mod error;
pub mod get_room_detail;
pub mod get_rooms;
pub mod join_room;
mod notify;
pub mod notify_typing;
pub mod send_message;

#[cfg(test)]
mod test_support;

pub use claim_username::ClaimUsernameUseCase;
pub use connect_session::ConnectSessionUseCase;
pub use create_room::CreateRoomUseCase;
pub use disconnect_session::DisconnectSessionUseCase;
pub use error::RelayError;
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use notify_typing::NotifyTypingUseCase;
pub use send_message::SendMessageUseCase;

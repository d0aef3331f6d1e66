//! Domain layer for the chat relay.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod repository;
pub mod room_directory;
pub mod session_registry;
pub mod value_object;

pub use entity::{
    ChatMessage, JOIN_HISTORY_LIMIT, MAX_HISTORY, Room, RoomSummary, Session, SessionState,
};
pub use error::{RoomError, SessionError, ValueObjectError};
pub use event::RelayEvent;
pub use message_pusher::{MessagePushError, MessagePusher, PusherChannel};
pub use repository::{ChatRepository, ChatState};
pub use room_directory::{DEFAULT_ROOM, JoinedRoom, RoomDirectory};
pub use session_registry::SessionRegistry;
pub use value_object::{
    MessageId, MessageIdFactory, MessageText, RoomName, SessionId, SessionIdFactory, Timestamp,
    Username,
};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;

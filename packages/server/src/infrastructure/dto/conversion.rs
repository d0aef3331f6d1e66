//! Conversion logic between domain entities and DTOs.

use kaiwa_shared::time::timestamp_to_rfc3339;

use crate::domain::{ChatMessage, RelayEvent, Room, RoomSummary};
use crate::infrastructure::dto::{
    http::{RoomDetailDto, RoomSummaryDto},
    websocket::{MessageDto, RoomInfo, ServerMessage},
};

// ========================================
// Domain Entity → WebSocket DTO
// ========================================

impl From<&ChatMessage> for MessageDto {
    fn from(model: &ChatMessage) -> Self {
        Self {
            id: model.id.to_string(),
            username: model.username.as_str().to_string(),
            text: model.text.as_str().to_string(),
            time: timestamp_to_rfc3339(model.time.value()),
        }
    }
}

impl From<&RoomSummary> for RoomInfo {
    fn from(model: &RoomSummary) -> Self {
        Self {
            name: model.name.as_str().to_string(),
            users: model.member_count,
        }
    }
}

impl From<&RelayEvent> for ServerMessage {
    fn from(event: &RelayEvent) -> Self {
        match event {
            RelayEvent::Rooms(rooms) => ServerMessage::Rooms {
                rooms: rooms.iter().map(RoomInfo::from).collect(),
            },
            RelayEvent::UsernameAccepted(username) => ServerMessage::UsernameAccepted {
                username: username.as_str().to_string(),
            },
            RelayEvent::UsernameRejected(reason) => ServerMessage::UsernameRejected {
                reason: reason.clone(),
            },
            RelayEvent::Joined { room, history } => ServerMessage::Joined {
                room: room.as_str().to_string(),
                history: history.iter().map(MessageDto::from).collect(),
            },
            RelayEvent::UserJoined(username) => ServerMessage::UserJoined {
                username: username.as_str().to_string(),
            },
            RelayEvent::UserLeft(username) => ServerMessage::UserLeft {
                username: username.as_str().to_string(),
            },
            RelayEvent::Message(message) => ServerMessage::Message {
                message: message.into(),
            },
            RelayEvent::Typing {
                username,
                is_typing,
            } => ServerMessage::Typing {
                username: username.as_str().to_string(),
                is_typing: *is_typing,
            },
            RelayEvent::Error(message) => ServerMessage::Error {
                message: message.clone(),
            },
        }
    }
}

// ========================================
// Domain Entity → HTTP DTO
// ========================================

impl From<&RoomSummary> for RoomSummaryDto {
    fn from(model: &RoomSummary) -> Self {
        Self {
            name: model.name.as_str().to_string(),
            users: model.member_count,
        }
    }
}

impl From<&Room> for RoomDetailDto {
    fn from(model: &Room) -> Self {
        let mut members: Vec<String> = model
            .members
            .iter()
            .map(|username| username.as_str().to_string())
            .collect();
        members.sort();

        Self {
            name: model.name.as_str().to_string(),
            members,
            message_count: model.history.len(),
        }
    }
}

//! WebSocket message DTOs.
//!
//! Every payload is a JSON object with a `type` discriminator.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Messages sent by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    SetUsername {
        #[serde(default, deserialize_with = "loose_string")]
        username: String,
    },
    CreateRoom {
        #[serde(default, deserialize_with = "loose_string")]
        room: String,
    },
    JoinRoom {
        #[serde(default, deserialize_with = "loose_string")]
        room: String,
    },
    SendMessage {
        #[serde(default, deserialize_with = "loose_string")]
        text: String,
    },
    Typing {
        #[serde(default, rename = "isTyping", deserialize_with = "truthy")]
        is_typing: bool,
    },
}

/// Messages sent by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Rooms {
        rooms: Vec<RoomInfo>,
    },
    UsernameAccepted {
        username: String,
    },
    UsernameRejected {
        reason: String,
    },
    Joined {
        room: String,
        history: Vec<MessageDto>,
    },
    UserJoined {
        username: String,
    },
    UserLeft {
        username: String,
    },
    Message {
        message: MessageDto,
    },
    Typing {
        username: String,
        #[serde(rename = "isTyping")]
        is_typing: bool,
    },
    Error {
        message: String,
    },
}

/// Room entry of the room list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    pub name: String,
    /// Number of members currently in the room
    pub users: usize,
}

/// Chat message as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub username: String,
    pub text: String,
    /// RFC 3339 UTC timestamp with millisecond precision
    pub time: String,
}

/// Strings arrive loosely typed: numbers and booleans are taken in their
/// textual form, anything else that is not a string counts as empty.
fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// `false`, `null`, `0` and `""` are false; every other value is true.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Room summary for `GET /api/rooms`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub name: String,
    pub users: usize,
}

/// Room detail for `GET /api/rooms/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailDto {
    pub name: String,
    /// Usernames of current members, sorted
    pub members: Vec<String>,
    pub message_count: usize,
}

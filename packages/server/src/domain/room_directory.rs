//! RoomDirectory: ルームの集合、各ルームの参加者と履歴の管理
//!
//! ルームは作成順を保持し、削除されることはありません。

use std::collections::HashMap;

use super::{
    entity::{ChatMessage, JOIN_HISTORY_LIMIT, Room, RoomSummary},
    error::RoomError,
    value_object::{RoomName, Username},
};

/// 起動時に用意される既定のルーム
pub const DEFAULT_ROOM: &str = "General";

/// `join` の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRoom {
    pub room: RoomName,
    /// 直近 100 件の履歴（古い順）
    pub history: Vec<ChatMessage>,
    /// 今回の操作で参加者に加わった場合は `true`（既に参加済みなら `false`）
    pub newly_joined: bool,
}

#[derive(Debug, Default)]
pub struct RoomDirectory {
    /// 作成順
    rooms: Vec<Room>,
    /// ルーム名 → `rooms` のインデックス
    index: HashMap<String, usize>,
}

impl RoomDirectory {
    /// ルームを 1 つも持たないディレクトリを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 既定のルーム（"General"）だけを持つディレクトリを作成する
    pub fn with_default_room() -> Self {
        let mut directory = Self::new();
        directory.insert(Room::new(RoomName::from_static(DEFAULT_ROOM)));
        directory
    }

    fn insert(&mut self, room: Room) {
        self.index
            .insert(room.name.as_str().to_string(), self.rooms.len());
        self.rooms.push(room);
    }

    fn get_mut(&mut self, room_name: &str) -> Option<&mut Room> {
        let position = *self.index.get(room_name)?;
        self.rooms.get_mut(position)
    }

    pub fn get(&self, room_name: &str) -> Option<&Room> {
        let position = *self.index.get(room_name)?;
        self.rooms.get(position)
    }

    pub fn contains(&self, room_name: &str) -> bool {
        self.index.contains_key(room_name)
    }

    /// ルームを作成する（名前は正規化され、大文字小文字を区別して重複判定する）
    pub fn create_room(&mut self, raw_name: &str) -> Result<RoomName, RoomError> {
        let name = RoomName::new(raw_name)?;
        if self.contains(name.as_str()) {
            return Err(RoomError::RoomExists(name.into_string()));
        }
        self.insert(Room::new(name.clone()));
        Ok(name)
    }

    /// 作成順のルーム一覧（参加者数付き）
    pub fn list_rooms(&self) -> Vec<RoomSummary> {
        self.rooms.iter().map(Room::summary).collect()
    }

    /// ルームに参加する。既に参加している場合は参加者を重複させない
    pub fn join(&mut self, room_name: &str, username: &Username) -> Result<JoinedRoom, RoomError> {
        let room = self
            .get_mut(room_name)
            .ok_or_else(|| RoomError::RoomNotFound(room_name.to_string()))?;
        let newly_joined = room.add_member(username.clone());
        Ok(JoinedRoom {
            room: room.name.clone(),
            history: room.recent_history(JOIN_HISTORY_LIMIT),
            newly_joined,
        })
    }

    /// ルームから退出する。ルームが存在しない場合や参加していない場合は何もしない
    pub fn leave(&mut self, room_name: &str, username: &Username) {
        if let Some(room) = self.get_mut(room_name) {
            room.remove_member(username);
        }
    }

    /// 履歴に追加する。ルームが存在しない場合はメッセージを破棄する
    pub fn append_message(&mut self, room_name: &str, message: ChatMessage) {
        match self.get_mut(room_name) {
            Some(room) => room.push_message(message),
            None => tracing::warn!("Dropped message for missing room '{}'", room_name),
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

//! エンティティ（Entity）
//!
//! - `Session`: 1 接続につき 1 つ。表示名と所属ルームを持つ
//! - `Room`: 名前付きのチャットルーム。参加者名の集合と上限付きの履歴を持つ
//! - `ChatMessage`: 生成後は不変のメッセージ

use std::collections::{HashSet, VecDeque};

use super::value_object::{MessageId, MessageText, RoomName, SessionId, Timestamp, Username};

/// ルームごとに保持する履歴の上限
pub const MAX_HISTORY: usize = 200;

/// 入室時に返す履歴の件数
pub const JOIN_HISTORY_LIMIT: usize = 100;

// ========================================
// Session
// ========================================

/// セッションの状態
///
/// `Anonymous` → `Named` → `InRoom` の順に遷移し、`Anonymous` に戻ることはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Named,
    InRoom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    pub username: Option<Username>,
    pub current_room: Option<RoomName>,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            username: None,
            current_room: None,
        }
    }

    pub fn state(&self) -> SessionState {
        match (&self.username, &self.current_room) {
            (None, _) => SessionState::Anonymous,
            (Some(_), None) => SessionState::Named,
            (Some(_), Some(_)) => SessionState::InRoom,
        }
    }
}

// ========================================
// ChatMessage
// ========================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub username: Username,
    pub text: MessageText,
    pub time: Timestamp,
}

impl ChatMessage {
    pub fn new(id: MessageId, username: Username, text: MessageText, time: Timestamp) -> Self {
        Self {
            id,
            username,
            text,
            time,
        }
    }
}

// ========================================
// Room
// ========================================

/// ルーム一覧に載せる要約（ルーム名と参加者数）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    pub name: RoomName,
    pub member_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: RoomName,
    /// 参加中のユーザー名（ユーザー名は一意なので参加者のハンドルとして使う）
    pub members: HashSet<Username>,
    /// 到着順の履歴（先頭が最古）
    pub history: VecDeque<ChatMessage>,
}

impl Room {
    pub fn new(name: RoomName) -> Self {
        Self {
            name,
            members: HashSet::new(),
            history: VecDeque::new(),
        }
    }

    /// 参加者を追加する。既に参加している場合は何もせず `false` を返す
    pub fn add_member(&mut self, username: Username) -> bool {
        self.members.insert(username)
    }

    /// 参加者を削除する。参加していなかった場合は `false` を返す
    pub fn remove_member(&mut self, username: &Username) -> bool {
        self.members.remove(username)
    }

    pub fn has_member(&self, username: &Username) -> bool {
        self.members.contains(username)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// 履歴の末尾に追加し、上限を超えた分を先頭から捨てる
    pub fn push_message(&mut self, message: ChatMessage) {
        self.history.push_back(message);
        while self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }
    }

    /// 直近 `limit` 件の履歴を古い順で返す
    pub fn recent_history(&self, limit: usize) -> Vec<ChatMessage> {
        let skip = self.history.len().saturating_sub(limit);
        self.history.iter().skip(skip).cloned().collect()
    }

    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            name: self.name.clone(),
            member_count: self.member_count(),
        }
    }
}

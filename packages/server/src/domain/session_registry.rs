//! SessionRegistry: 接続中のセッションと表示名の管理
//!
//! 表示名は大文字小文字を区別せずに一意であることを保証します。
//! 呼び出し側（UseCase）は ChatState のロックを保持したまま操作するため、
//! 一意性の確認と登録は同一のクリティカルセクション内で行われます。

use std::collections::HashMap;

use super::{
    entity::Session,
    error::SessionError,
    value_object::{RoomName, SessionId, SessionIdFactory, Username},
};

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Session>,
    /// 一意性キー（小文字化した表示名）→ SessionId
    usernames: HashMap<String, SessionId>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 表示名もルームも持たない新しいセッションを登録する
    pub fn register(&mut self) -> SessionId {
        let id = SessionIdFactory::generate();
        self.sessions.insert(id, Session::new(id));
        id
    }

    /// 表示名を要求する
    ///
    /// 判定順序: セッションの存在 → 既に表示名を持っていないか → 正規化後に空でないか → 一意性
    pub fn claim_username(
        &mut self,
        id: &SessionId,
        proposed: &str,
    ) -> Result<Username, SessionError> {
        let session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::SessionNotFound(id.to_string()))?;

        if let Some(current) = &session.username {
            return Err(SessionError::UsernameAlreadySet(current.to_string()));
        }

        let username = Username::new(proposed)?;
        let key = username.uniqueness_key();
        if self.usernames.contains_key(&key) {
            return Err(SessionError::UsernameTaken(username.into_string()));
        }

        session.username = Some(username.clone());
        self.usernames.insert(key, *id);
        Ok(username)
    }

    /// セッションを削除し、保持していた表示名と所属ルームを返す
    pub fn unregister(&mut self, id: &SessionId) -> Option<Session> {
        let session = self.sessions.remove(id)?;
        if let Some(username) = &session.username {
            self.usernames.remove(&username.uniqueness_key());
        }
        Some(session)
    }

    pub fn get(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn set_current_room(&mut self, id: &SessionId, room: RoomName) -> Result<(), SessionError> {
        let session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::SessionNotFound(id.to_string()))?;
        session.current_room = Some(room);
        Ok(())
    }

    pub fn all_session_ids(&self) -> Vec<SessionId> {
        self.sessions.keys().copied().collect()
    }

    /// 指定ルームに所属しているセッションの ID を返す
    pub fn sessions_in_room(&self, room: &RoomName) -> Vec<SessionId> {
        self.sessions
            .values()
            .filter(|session| session.current_room.as_ref() == Some(room))
            .map(|session| session.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

//! 値オブジェクト（Value Object）
//!
//! 生成時に正規化・検証を行い、不正な値がドメイン内に存在しないことを保証します。
//! 文字数の上限は Unicode スカラー値（`char`）単位で数えます。

use std::fmt;

use uuid::Uuid;

use super::error::ValueObjectError;

/// ユーザー名の最大文字数
pub const USERNAME_MAX_CHARS: usize = 30;
/// ルーム名の最大文字数
pub const ROOM_NAME_MAX_CHARS: usize = 40;
/// メッセージ本文の最大文字数
pub const MESSAGE_TEXT_MAX_CHARS: usize = 2000;

/// 前後の空白を取り除き、先頭から `max_chars` 文字に切り詰める
fn normalize(raw: &str, max_chars: usize) -> String {
    raw.trim().chars().take(max_chars).collect()
}

// ========================================
// SessionId
// ========================================

/// 接続（セッション）ごとに払い出される識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// SessionId の生成器（UUID v4）
pub struct SessionIdFactory;

impl SessionIdFactory {
    pub fn generate() -> SessionId {
        SessionId(Uuid::new_v4())
    }
}

// ========================================
// MessageId
// ========================================

/// メッセージ識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// MessageId の生成器（UUID v4）
pub struct MessageIdFactory;

impl MessageIdFactory {
    pub fn generate() -> MessageId {
        MessageId(Uuid::new_v4())
    }
}

// ========================================
// Username
// ========================================

/// 表示名
///
/// 前後の空白を除去し 30 文字に切り詰めた結果が空であれば生成できません。
/// 一意性は大文字小文字を区別せずに判定するため、比較キーとして
/// [`Username::uniqueness_key`] を提供します。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    pub fn new(raw: &str) -> Result<Self, ValueObjectError> {
        let normalized = normalize(raw, USERNAME_MAX_CHARS);
        if normalized.is_empty() {
            return Err(ValueObjectError::UsernameEmpty);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// 一意性判定用のキー（小文字化）
    pub fn uniqueness_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl TryFrom<String> for Username {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ========================================
// RoomName
// ========================================

/// ルーム名（前後の空白を除去し 40 文字に切り詰める。大文字小文字は区別する）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomName(String);

impl RoomName {
    pub fn new(raw: &str) -> Result<Self, ValueObjectError> {
        let normalized = normalize(raw, ROOM_NAME_MAX_CHARS);
        if normalized.is_empty() {
            return Err(ValueObjectError::RoomNameEmpty);
        }
        Ok(Self(normalized))
    }

    /// 正規化済みの定数から生成する（空でないことは呼び出し側が保証する）
    pub(crate) fn from_static(name: &'static str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ========================================
// MessageText
// ========================================

/// メッセージ本文（前後の空白を除去し 2000 文字に切り詰める）
///
/// 装飾記法などの変換は行わず、受け取った文字列をそのまま保持します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    pub fn new(raw: &str) -> Result<Self, ValueObjectError> {
        let normalized = normalize(raw, MESSAGE_TEXT_MAX_CHARS);
        if normalized.is_empty() {
            return Err(ValueObjectError::MessageTextEmpty);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

// ========================================
// Timestamp
// ========================================

/// Unix タイムスタンプ（UTC, ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

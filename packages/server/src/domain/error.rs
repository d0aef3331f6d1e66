//! ドメイン層のエラー定義

use thiserror::Error;

/// 値オブジェクトの生成エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("username is empty after normalization")]
    UsernameEmpty,

    #[error("room name is empty after normalization")]
    RoomNameEmpty,

    #[error("message text is empty after normalization")]
    MessageTextEmpty,
}

/// SessionRegistry の操作エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session '{0}' not found")]
    SessionNotFound(String),

    #[error("invalid username: {0}")]
    InvalidUsername(#[from] ValueObjectError),

    #[error("username '{0}' is already in use")]
    UsernameTaken(String),

    #[error("session already holds username '{0}'")]
    UsernameAlreadySet(String),
}

/// RoomDirectory の操作エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("invalid room name: {0}")]
    InvalidName(#[from] ValueObjectError),

    #[error("room '{0}' already exists")]
    RoomExists(String),

    #[error("room '{0}' not found")]
    RoomNotFound(String),
}

//! インメモリ実装（プロセス終了で状態は失われる）

mod chat;

pub use chat::InMemoryChatRepository;

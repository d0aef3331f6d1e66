//! Utilities shared by the Kaiwa workspace crates.

pub mod logger;
pub mod time;

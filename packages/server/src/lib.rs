//! Kaiwa chat relay server.
//!
//! Layers:
//! - `domain`: value objects, entities, session registry, room directory and the
//!   repository / message pusher abstractions
//! - `infrastructure`: in-memory repository, WebSocket message pusher and DTOs
//! - `usecase`: one use case per protocol operation
//! - `ui`: axum server, handlers and shutdown handling

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

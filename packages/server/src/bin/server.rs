//! Room-based WebSocket chat relay.
//!
//! Clients claim a unique username, join a room and exchange messages with
//! everyone currently in that room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin kaiwa-server
//! cargo run --bin kaiwa-server -- --host 127.0.0.1 --port 8080
//! PORT=8080 cargo run --bin kaiwa-server
//! ```

use std::sync::Arc;

use clap::Parser;
use kaiwa_server::{
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryChatRepository},
    ui::{AppState, Server},
};
use kaiwa_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "kaiwa-server")]
#[command(about = "Room-based WebSocket chat relay", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // 1. Create Repository (in-memory database, seeded with the default room)
    let repository = Arc::new(InMemoryChatRepository::new());

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 3. Create UseCases
    let state = AppState::new(repository, message_pusher, Arc::new(SystemClock));

    // 4. Create and run the server
    let server = Server::new(state);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

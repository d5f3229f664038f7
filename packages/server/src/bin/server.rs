//! Hiroba room presence server.
//!
//! Serves the browser client, the socket.io endpoint and a small read-only
//! HTTP API on a single port.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-server
//! cargo run --bin hiroba-server -- --port 3001 --mode production
//! PORT=8080 APP_ENV=production cargo run --bin hiroba-server
//! ```

use std::{path::PathBuf, sync::Arc};

use clap::{Parser, ValueEnum};
use hiroba_server::{
    infrastructure::{message_pusher::SocketIoMessagePusher, repository::InMemoryRoomRepository},
    ui::{Server, state::AppState},
};
use hiroba_shared::{logger::setup_logger, time::SystemClock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RunMode {
    Development,
    Production,
}

impl RunMode {
    /// 既定の静的ファイルディレクトリ
    fn default_static_dir(self) -> PathBuf {
        match self {
            RunMode::Development => PathBuf::from("dist/public"),
            RunMode::Production => PathBuf::from("public"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "hiroba-server")]
#[command(about = "Room presence and real-time coordination server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "3001")]
    port: u16,

    /// Run mode, selects the default static directory
    #[arg(long, env = "APP_ENV", value_enum, default_value_t = RunMode::Development)]
    mode: RunMode,

    /// Directory of the built browser client (overrides the mode default)
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    let default_level = match args.mode {
        RunMode::Development => "debug",
        RunMode::Production => "info",
    };
    setup_logger(env!("CARGO_BIN_NAME"), default_level);

    // Initialize dependencies in order:
    // 1. Repository
    // 2. MessagePusher
    // 3. UseCases (AppState)
    // 4. Server

    // 1. Create Repository (in-memory, empty at startup)
    let repository = Arc::new(InMemoryRoomRepository::default());

    // 2. Create MessagePusher (socket.io implementation)
    let message_pusher = Arc::new(SocketIoMessagePusher::default());

    // 3. Create UseCases
    let app_state = AppState::new(repository, message_pusher, Arc::new(SystemClock));

    // 4. Create and run the server
    let static_dir = args
        .static_dir
        .unwrap_or_else(|| args.mode.default_static_dir());
    tracing::info!("Starting in {:?} mode", args.mode);

    let server = Server::new(app_state, static_dir);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

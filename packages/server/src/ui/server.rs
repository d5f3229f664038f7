//! Server execution logic.

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use socketioxide::{SocketIo, extract::SocketRef};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::{
    handler::{get_room_detail, get_rooms, health_check, on_connect},
    signal::shutdown_signal,
    state::AppState,
};

/// Hiroba server
///
/// socket.io エンドポイント（`/socket.io/`）、HTTP API（`/api/*`）、静的ファイルを
/// 1 つのポートで提供します。
///
/// # Example
///
/// ```ignore
/// let server = Server::new(app_state, PathBuf::from("dist/public"));
/// server.run("0.0.0.0".to_string(), 3001).await?;
/// ```
pub struct Server {
    /// 全ハンドラで共有する状態
    app_state: Arc<AppState>,
    /// 静的ファイルのルートディレクトリ
    static_dir: PathBuf,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `app_state` - UseCases shared by every handler
    /// * `static_dir` - Directory served for non-API paths; unmatched paths fall back to its `index.html`
    pub fn new(app_state: AppState, static_dir: PathBuf) -> Self {
        Self {
            app_state: Arc::new(app_state),
            static_dir,
        }
    }

    /// Build the application router
    pub fn router(&self) -> Router {
        let (socket_layer, io) = SocketIo::new_layer();
        let state = self.app_state.clone();
        io.ns("/", move |socket: SocketRef| on_connect(socket, state.clone()));

        // 未知のパスは index.html に戻す（クライアント側ルーティング用）
        let static_files = ServeDir::new(&self.static_dir)
            .fallback(ServeFile::new(self.static_dir.join("index.html")));

        Router::new()
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .route("/api/rooms/{room_id}", get(get_room_detail))
            .with_state(self.app_state.clone())
            .fallback_service(static_files)
            // socket.io エンドポイント
            .layer(socket_layer)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "0.0.0.0")
    /// * `port` - The port number to bind to (e.g., 3001)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Hiroba server listening on {}", listener.local_addr()?);
        tracing::info!("Serving static files from {}", self.static_dir.display());
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

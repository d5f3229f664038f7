//! メッセージ送信（通知）の実装
//!
//! - `socketio`: socket.io 接続ごとの送信チャンネルを使った実装

pub mod socketio;

pub use socketio::SocketIoMessagePusher;

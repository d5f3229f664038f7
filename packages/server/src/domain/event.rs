//! Outbound room events
//!
//! UseCase 層が MessagePusher に渡す通知。ワイヤ形式への変換は Infrastructure 層
//! （`infrastructure::dto::socketio`）が担当します。

use super::{
    entity::{ChatMessage, User},
    value_object::{ConnectionId, Position, ScreenShareSize},
};

/// Opaque WebRTC signaling blob, forwarded verbatim and never inspected
pub type SignalPayload = serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum RoomEvent {
    /// Sent once per connection right after it is established
    ConnectionAck { socket_id: ConnectionId },
    /// Full room snapshot, sent only to the joiner
    RoomStateSync {
        users: Vec<User>,
        chat_history: Vec<ChatMessage>,
        my_user: User,
        background_image: Option<String>,
    },
    UserJoined(User),
    UserMoved {
        id: ConnectionId,
        position: Position,
    },
    ReceiveMessage(ChatMessage),
    UserLeft(ConnectionId),
    BackgroundUpdated(String),
    ScreenShareState {
        id: ConnectionId,
        is_screen_sharing: bool,
    },
    ScreenShareSize {
        id: ConnectionId,
        size: ScreenShareSize,
    },
    /// Offer forwarded to the peer being called
    SignalOffered {
        signal: SignalPayload,
        caller_id: ConnectionId,
    },
    /// Answer forwarded back to the original caller
    SignalReturned {
        signal: SignalPayload,
        id: ConnectionId,
    },
    ReceiveReaction {
        id: ConnectionId,
        emoji: String,
        position: Position,
    },
}

impl RoomEvent {
    /// Event name on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConnectionAck { .. } => "connection-ack",
            Self::RoomStateSync { .. } => "room-state-sync",
            Self::UserJoined(_) => "user-joined",
            Self::UserMoved { .. } => "user-moved",
            Self::ReceiveMessage(_) => "receive-message",
            Self::UserLeft(_) => "user-left",
            Self::BackgroundUpdated(_) => "background-updated",
            Self::ScreenShareState { .. } => "user-screen-share-state",
            Self::ScreenShareSize { .. } => "user-screen-share-size",
            Self::SignalOffered { .. } => "user-joined-signal",
            Self::SignalReturned { .. } => "receiving-returned-signal",
            Self::ReceiveReaction { .. } => "receive-reaction",
        }
    }
}

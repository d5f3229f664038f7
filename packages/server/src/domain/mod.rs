//! Domain layer: entities, value objects, the room registry and the
//! interfaces the use cases depend on.

pub mod entity;
pub mod error;
pub mod event;
pub mod factory;
pub mod message_pusher;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use entity::{CHAT_HISTORY_CAPACITY, ChatMessage, Room, User};
pub use error::{MessagePushError, RepositoryError};
pub use event::{RoomEvent, SignalPayload};
pub use factory::MessageIdFactory;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use registry::{Departure, Joined, RoomRegistry};
pub use repository::{RoomRepository, RoomTurn};
pub use value_object::{
    ConnectionId, MessageId, Position, RoomId, ScreenShareSize, Timestamp, UserProfile,
};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;

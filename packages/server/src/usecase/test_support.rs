//! Shared fixtures for the use case tests.

use std::{collections::HashMap, sync::Arc};

use hiroba_shared::time::FixedClock;
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, MessagePusher, Position, RoomEvent, RoomId, User, UserProfile},
    infrastructure::{message_pusher::SocketIoMessagePusher, repository::InMemoryRoomRepository},
};

use super::JoinRoomUseCase;

pub const FIXED_NOW: i64 = 1_700_000_000_000;

pub struct TestContext {
    pub repository: Arc<InMemoryRoomRepository>,
    pub message_pusher: Arc<SocketIoMessagePusher>,
    pub clock: Arc<FixedClock>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryRoomRepository::default()),
            message_pusher: Arc::new(SocketIoMessagePusher::default()),
            clock: Arc::new(FixedClock::new(FIXED_NOW)),
        }
    }

    /// Register an outbound channel for `id` and return its receiving end.
    pub async fn connect(&self, id: &str) -> mpsc::UnboundedReceiver<RoomEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.message_pusher
            .register_client(ConnectionId::from(id), tx)
            .await;
        rx
    }

    pub fn join_usecase(&self) -> JoinRoomUseCase {
        JoinRoomUseCase::new(
            self.repository.clone(),
            self.message_pusher.clone(),
            self.clock.clone(),
        )
    }

    /// Join `room` as `id`, using `id` as the display name.
    pub async fn join(&self, id: &str, room: &str) -> User {
        self.join_usecase()
            .execute(
                &ConnectionId::from(id),
                RoomId::from(room),
                UserProfile::new(id.to_string(), String::new()),
            )
            .await
    }
}

/// Everything currently queued on the channel.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<RoomEvent>) -> Vec<RoomEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Names of the queued events, in order.
pub fn drain_names(rx: &mut mpsc::UnboundedReceiver<RoomEvent>) -> Vec<&'static str> {
    drain(rx).iter().map(RoomEvent::name).collect()
}

/// Rebuild the room a client renders from the events it received:
/// user id → last known position.
pub fn replay_view(events: &[RoomEvent]) -> HashMap<ConnectionId, Position> {
    let mut view = HashMap::new();
    for event in events {
        match event {
            RoomEvent::RoomStateSync { users, .. } => {
                view = users.iter().map(|u| (u.id.clone(), u.position)).collect();
            }
            RoomEvent::UserJoined(user) => {
                view.insert(user.id.clone(), user.position);
            }
            RoomEvent::UserMoved { id, position } => {
                if let Some(known) = view.get_mut(id) {
                    *known = *position;
                }
            }
            RoomEvent::UserLeft(id) => {
                view.remove(id);
            }
            _ => {}
        }
    }
    view
}

//! RoomRegistry: process-wide room table and membership index.
//!
//! Created empty at startup and never persisted. Every operation re-resolves
//! the connection's room through the membership index, so callers never hold
//! a room reference across calls. Callers serialize access (see
//! `InMemoryRoomRepository`).

use std::collections::HashMap;

use super::{
    entity::{Room, User},
    value_object::{ConnectionId, Position, RoomId, Timestamp, UserProfile},
};

/// Result of removing a connection from its room
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    pub room_id: RoomId,
    pub user: User,
    /// Members still in the room, to be notified
    pub remaining: Vec<ConnectionId>,
    /// Whether the room was reaped because it became empty
    pub room_closed: bool,
}

/// Result of adding a connection to a room
#[derive(Debug, Clone, PartialEq)]
pub struct Joined {
    /// Set when the connection had to leave another room first
    pub previous: Option<Departure>,
    pub user: User,
    /// Snapshot of the room right after the join, joiner included
    pub room: Room,
}

#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<RoomId, Room>,
    memberships: HashMap<ConnectionId, RoomId>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the room, creating an empty one if it does not exist.
    pub fn get_or_create(&mut self, room_id: &RoomId, now: Timestamp) -> &mut Room {
        self.rooms
            .entry(room_id.clone())
            .or_insert_with(|| Room::new(room_id.clone(), now))
    }

    /// Delete the room iff it has no users. Returns whether it was deleted.
    pub fn reap_if_empty(&mut self, room_id: &RoomId) -> bool {
        if self.rooms.get(room_id).is_some_and(Room::is_empty) {
            self.rooms.remove(room_id);
            true
        } else {
            false
        }
    }

    /// Put the connection into `room_id`, leaving its current room first.
    pub fn join(
        &mut self,
        connection_id: &ConnectionId,
        room_id: &RoomId,
        profile: UserProfile,
        position: Position,
        now: Timestamp,
    ) -> Joined {
        let previous = self.leave(connection_id);

        let user = User::new(connection_id.clone(), profile, position);
        let room = self.get_or_create(room_id, now);
        room.add_user(user.clone());
        let snapshot = room.clone();
        self.memberships
            .insert(connection_id.clone(), room_id.clone());

        Joined {
            previous,
            user,
            room: snapshot,
        }
    }

    /// Remove the connection from its room. `None` if it is not in one, so a
    /// repeated leave is a no-op.
    pub fn leave(&mut self, connection_id: &ConnectionId) -> Option<Departure> {
        let room_id = self.memberships.remove(connection_id)?;
        let room = self.rooms.get_mut(&room_id)?;
        let user = room.remove_user(connection_id);
        let remaining = room.member_ids();
        let room_closed = self.reap_if_empty(&room_id);

        user.map(|user| Departure {
            room_id,
            user,
            remaining,
            room_closed,
        })
    }

    #[cfg(test)]
    pub fn room_of(&self, connection_id: &ConnectionId) -> Option<&RoomId> {
        self.memberships.get(connection_id)
    }

    /// Run `f` on the connection's current room, if any.
    pub fn with_room_of<R>(
        &mut self,
        connection_id: &ConnectionId,
        f: impl FnOnce(&mut Room) -> R,
    ) -> Option<R> {
        let room_id = self.memberships.get(connection_id)?;
        self.rooms.get_mut(room_id).map(f)
    }

    /// Run `f` on the connection's own user entry and return the other
    /// members of its room.
    pub fn update_user(
        &mut self,
        connection_id: &ConnectionId,
        f: impl FnOnce(&mut User),
    ) -> Option<Vec<ConnectionId>> {
        self.with_room_of(connection_id, |room| {
            let user = room.find_user_mut(connection_id)?;
            f(user);
            Some(room.member_ids_except(connection_id))
        })
        .flatten()
    }

    pub fn get_room(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    #[cfg(test)]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

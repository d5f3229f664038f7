//! Entities
//!
//! 識別子によって同一性が決まるドメインオブジェクト（User, ChatMessage, Room）。

use std::collections::VecDeque;

use super::value_object::{
    ConnectionId, MessageId, Position, RoomId, ScreenShareSize, Timestamp, UserProfile,
};

/// Number of chat messages a room keeps before evicting the oldest
pub const CHAT_HISTORY_CAPACITY: usize = 50;

/// A user's membership in a room
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ConnectionId,
    pub name: String,
    pub avatar: String,
    pub position: Position,
    pub is_screen_sharing: bool,
    pub screen_share_size: ScreenShareSize,
}

impl User {
    pub fn new(id: ConnectionId, profile: UserProfile, position: Position) -> Self {
        Self {
            id,
            name: profile.name,
            avatar: profile.avatar,
            position,
            is_screen_sharing: false,
            screen_share_size: ScreenShareSize::default(),
        }
    }
}

/// A chat message as stored in room history.
///
/// `zone_id` is advisory: delivery is never restricted by it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub message: String,
    pub sender: String,
    pub timestamp: Timestamp,
    pub zone_id: Option<String>,
}

impl ChatMessage {
    pub fn new(
        id: MessageId,
        message: String,
        sender: String,
        timestamp: Timestamp,
        zone_id: Option<String>,
    ) -> Self {
        Self {
            id,
            message,
            sender,
            timestamp,
            zone_id,
        }
    }
}

/// Room state: members, bounded chat history and shared background
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub users: Vec<User>,
    pub chat_history: VecDeque<ChatMessage>,
    pub background_image: Option<String>,
    pub created_at: Timestamp,
}

impl Room {
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            users: Vec::new(),
            chat_history: VecDeque::with_capacity(CHAT_HISTORY_CAPACITY),
            background_image: None,
            created_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Add a user, replacing any existing entry with the same id so that a
    /// connection is never listed twice.
    pub fn add_user(&mut self, user: User) {
        self.users.retain(|u| u.id != user.id);
        self.users.push(user);
    }

    pub fn remove_user(&mut self, id: &ConnectionId) -> Option<User> {
        let index = self.users.iter().position(|u| &u.id == id)?;
        Some(self.users.remove(index))
    }

    pub fn find_user_mut(&mut self, id: &ConnectionId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| &u.id == id)
    }

    /// Append to history, evicting the oldest entries beyond capacity.
    pub fn push_message(&mut self, message: ChatMessage) {
        self.chat_history.push_back(message);
        while self.chat_history.len() > CHAT_HISTORY_CAPACITY {
            self.chat_history.pop_front();
        }
    }

    pub fn member_ids(&self) -> Vec<ConnectionId> {
        self.users.iter().map(|u| u.id.clone()).collect()
    }

    pub fn member_ids_except(&self, exclude: &ConnectionId) -> Vec<ConnectionId> {
        self.users
            .iter()
            .filter(|u| &u.id != exclude)
            .map(|u| u.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> User {
        User::new(
            ConnectionId::from(id),
            UserProfile::new(id.to_string(), String::new()),
            Position::new(100.0, 100.0),
        )
    }

    fn message(n: usize) -> ChatMessage {
        ChatMessage::new(
            MessageId::new(format!("m{n}")),
            format!("message {n}"),
            "alice".to_string(),
            Timestamp::new(n as i64),
            None,
        )
    }

    #[test]
    fn test_new_user_has_screen_share_defaults() {
        // テスト項目: 新規ユーザーは画面共有オフ、サイズ 480x360 で作成される
        // given (前提条件):

        // when (操作):
        let u = user("alice");

        // then (期待する結果):
        assert!(!u.is_screen_sharing);
        assert_eq!(u.screen_share_size, ScreenShareSize::new(480.0, 360.0));
    }

    #[test]
    fn test_add_user_never_duplicates_id() {
        // テスト項目: 同じ ID のユーザーを追加しても二重に登録されない
        // given (前提条件):
        let mut room = Room::new(RoomId::from("lobby"), Timestamp::new(0));
        room.add_user(user("alice"));

        // when (操作):
        room.add_user(user("alice"));

        // then (期待する結果):
        assert_eq!(room.users.len(), 1);
    }

    #[test]
    fn test_remove_user_returns_removed_entry() {
        // テスト項目: 削除したユーザーが返され、存在しない場合は None
        // given (前提条件):
        let mut room = Room::new(RoomId::from("lobby"), Timestamp::new(0));
        room.add_user(user("alice"));
        room.add_user(user("bob"));

        // when (操作):
        let removed = room.remove_user(&ConnectionId::from("alice"));
        let missing = room.remove_user(&ConnectionId::from("alice"));

        // then (期待する結果):
        assert_eq!(removed.map(|u| u.id), Some(ConnectionId::from("alice")));
        assert!(missing.is_none());
        assert_eq!(room.member_ids(), vec![ConnectionId::from("bob")]);
    }

    #[test]
    fn test_push_message_evicts_oldest_beyond_capacity() {
        // テスト項目: 55 件送信すると最新 50 件が到着順で残り、古い 5 件が削除される
        // given (前提条件):
        let mut room = Room::new(RoomId::from("lobby"), Timestamp::new(0));

        // when (操作):
        for n in 0..55 {
            room.push_message(message(n));
        }

        // then (期待する結果):
        assert_eq!(room.chat_history.len(), CHAT_HISTORY_CAPACITY);
        let ids: Vec<&str> = room.chat_history.iter().map(|m| m.id.as_str()).collect();
        let expected: Vec<String> = (5..55).map(|n| format!("m{n}")).collect();
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_member_ids_except_excludes_given_id() {
        // テスト項目: 指定したユーザー以外のメンバー ID が参加順で返される
        // given (前提条件):
        let mut room = Room::new(RoomId::from("lobby"), Timestamp::new(0));
        room.add_user(user("alice"));
        room.add_user(user("bob"));
        room.add_user(user("charlie"));

        // when (操作):
        let others = room.member_ids_except(&ConnectionId::from("bob"));

        // then (期待する結果):
        assert_eq!(
            others,
            vec![ConnectionId::from("alice"), ConnectionId::from("charlie")]
        );
    }
}

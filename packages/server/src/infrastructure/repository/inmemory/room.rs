//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! `RoomRegistry`（ルーム表とメンバーシップ索引）を 1 つの Mutex で保護し、
//! 各メソッドを 1 つのクリティカルセクションとして実行します。
//! 変更と通知の順番（`begin_turn`）は状態のロックとは別の Mutex で管理します。
//! サーバ再起動をまたいだ永続化は行いません。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ChatMessage, ConnectionId, Departure, Joined, Position, RepositoryError, Room, RoomId,
    RoomRegistry, RoomRepository, RoomTurn, ScreenShareSize, Timestamp, UserProfile,
};

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    /// ルーム表とメンバーシップ索引
    registry: Arc<Mutex<RoomRegistry>>,
    /// 変更と通知の順番
    turn: Arc<Mutex<()>>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new(registry: Arc<Mutex<RoomRegistry>>) -> Self {
        Self {
            registry,
            turn: Arc::new(Mutex::new(())),
        }
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(RoomRegistry::new())))
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn begin_turn(&self) -> RoomTurn {
        self.turn.clone().lock_owned().await
    }

    async fn join(
        &self,
        connection_id: &ConnectionId,
        room_id: &RoomId,
        profile: UserProfile,
        position: Position,
        now: Timestamp,
    ) -> Joined {
        let mut registry = self.registry.lock().await;
        registry.join(connection_id, room_id, profile, position, now)
    }

    async fn leave(&self, connection_id: &ConnectionId) -> Option<Departure> {
        let mut registry = self.registry.lock().await;
        registry.leave(connection_id)
    }

    async fn update_position(
        &self,
        connection_id: &ConnectionId,
        position: Position,
    ) -> Option<Vec<ConnectionId>> {
        let mut registry = self.registry.lock().await;
        registry.update_user(connection_id, |user| user.position = position)
    }

    async fn set_screen_sharing(
        &self,
        connection_id: &ConnectionId,
        is_screen_sharing: bool,
    ) -> Option<Vec<ConnectionId>> {
        let mut registry = self.registry.lock().await;
        registry.update_user(connection_id, |user| {
            user.is_screen_sharing = is_screen_sharing
        })
    }

    async fn set_screen_share_size(
        &self,
        connection_id: &ConnectionId,
        size: ScreenShareSize,
    ) -> Option<Vec<ConnectionId>> {
        let mut registry = self.registry.lock().await;
        registry.update_user(connection_id, |user| user.screen_share_size = size)
    }

    async fn add_message(
        &self,
        connection_id: &ConnectionId,
        message: ChatMessage,
    ) -> Option<Vec<ConnectionId>> {
        let mut registry = self.registry.lock().await;
        registry.with_room_of(connection_id, |room| {
            room.push_message(message);
            room.member_ids()
        })
    }

    async fn set_background(
        &self,
        connection_id: &ConnectionId,
        url: String,
    ) -> Option<Vec<ConnectionId>> {
        let mut registry = self.registry.lock().await;
        registry.with_room_of(connection_id, |room| {
            room.background_image = Some(url);
            room.member_ids()
        })
    }

    async fn get_room_members(&self, connection_id: &ConnectionId) -> Option<Vec<ConnectionId>> {
        let mut registry = self.registry.lock().await;
        registry.with_room_of(connection_id, |room| room.member_ids())
    }

    async fn get_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError> {
        let registry = self.registry.lock().await;
        registry
            .get_room(room_id)
            .cloned()
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.as_str().to_string()))
    }

    async fn get_rooms(&self) -> Vec<Room> {
        let registry = self.registry.lock().await;
        let mut rooms: Vec<Room> = registry.rooms().cloned().collect();
        rooms.sort_by(|a, b| a.id.cmp(&b.id));
        rooms
    }
}

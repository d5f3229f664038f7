//! UseCase: リアクション送信
//!
//! リアクションは一時的な演出のため保存しません。送信者を含むルームの全員に
//! `receive-reaction` を送信します。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, Position, RoomEvent, RoomRepository};

pub struct SendReactionUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl SendReactionUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        emoji: String,
        position: Position,
    ) -> bool {
        let _turn = self.repository.begin_turn().await;
        let Some(members) = self.repository.get_room_members(connection_id).await else {
            return false;
        };

        let event = RoomEvent::ReceiveReaction {
            id: connection_id.clone(),
            emoji,
            position,
        };
        if let Err(e) = self.message_pusher.broadcast(members, event).await {
            tracing::warn!("Failed to broadcast receive-reaction: {}", e);
        }
        true
    }
}

//! UseCase: 背景画像の変更
//!
//! URL は検証せず、最後に設定されたものが有効になります。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomEvent, RoomRepository};

pub struct ChangeBackgroundUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl ChangeBackgroundUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 背景画像を設定し、送信者を含む全員に通知
    pub async fn execute(&self, connection_id: &ConnectionId, url: String) -> bool {
        let _turn = self.repository.begin_turn().await;
        let Some(members) = self
            .repository
            .set_background(connection_id, url.clone())
            .await
        else {
            return false;
        };

        tracing::info!("User '{}' changed background to '{}'", connection_id, url);
        if let Err(e) = self
            .message_pusher
            .broadcast(members, RoomEvent::BackgroundUpdated(url))
            .await
        {
            tracing::warn!("Failed to broadcast background-updated: {}", e);
        }
        true
    }
}

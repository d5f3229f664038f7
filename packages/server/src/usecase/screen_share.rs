//! UseCase: 画面共有の状態とサイズ
//!
//! どちらもユーザーの表示状態を更新し、送信者以外のメンバーに通知します。
//! 映像そのものはクライアント同士の WebRTC で流れるため、サーバは関与しません。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomEvent, RoomRepository, ScreenShareSize};

pub struct ScreenShareUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl ScreenShareUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 画面共有の開始・停止
    pub async fn set_state(&self, connection_id: &ConnectionId, is_screen_sharing: bool) -> bool {
        let _turn = self.repository.begin_turn().await;
        let Some(others) = self
            .repository
            .set_screen_sharing(connection_id, is_screen_sharing)
            .await
        else {
            return false;
        };

        tracing::debug!(
            "User '{}' screen sharing: {}",
            connection_id,
            is_screen_sharing
        );
        let event = RoomEvent::ScreenShareState {
            id: connection_id.clone(),
            is_screen_sharing,
        };
        if let Err(e) = self.message_pusher.broadcast(others, event).await {
            tracing::warn!("Failed to broadcast user-screen-share-state: {}", e);
        }
        true
    }

    /// 画面共有の表示サイズ変更
    pub async fn set_size(&self, connection_id: &ConnectionId, size: ScreenShareSize) -> bool {
        let _turn = self.repository.begin_turn().await;
        let Some(others) = self
            .repository
            .set_screen_share_size(connection_id, size)
            .await
        else {
            return false;
        };

        let event = RoomEvent::ScreenShareSize {
            id: connection_id.clone(),
            size,
        };
        if let Err(e) = self.message_pusher.broadcast(others, event).await {
            tracing::warn!("Failed to broadcast user-screen-share-size: {}", e);
        }
        true
    }
}

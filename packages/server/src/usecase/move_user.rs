//! UseCase: 位置の更新
//!
//! 最後に届いた位置で上書きし（履歴は持たない）、送信者以外のメンバーに
//! `user-moved` を送信します。送信者は自分の位置を既に知っているため送り返しません。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, Position, RoomEvent, RoomRepository};

pub struct MoveUserUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl MoveUserUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// # Returns
    ///
    /// 更新した場合は `true`、ルームに参加していなければ `false`
    pub async fn execute(&self, connection_id: &ConnectionId, position: Position) -> bool {
        let _turn = self.repository.begin_turn().await;
        let Some(others) = self
            .repository
            .update_position(connection_id, position)
            .await
        else {
            return false;
        };

        let event = RoomEvent::UserMoved {
            id: connection_id.clone(),
            position,
        };
        if let Err(e) = self.message_pusher.broadcast(others, event).await {
            tracing::warn!("Failed to broadcast user-moved: {}", e);
        }
        true
    }
}

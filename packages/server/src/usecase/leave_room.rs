//! UseCase: ルーム退出処理
//!
//! 明示的な `leave-room` と切断の両方がこの処理を通ります。
//! 2 回目以降の呼び出しは何もしないため、`user-left` は 1 度しか送られません。

use std::sync::Arc;

use crate::domain::{ConnectionId, Departure, MessagePusher, RoomEvent, RoomRepository};

/// ルーム退出のユースケース
pub struct LeaveRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl LeaveRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 現在のルームから退出
    ///
    /// # Returns
    ///
    /// 退出が発生した場合は `true`、どのルームにも参加していなければ `false`
    pub async fn execute(&self, connection_id: &ConnectionId) -> bool {
        let _turn = self.repository.begin_turn().await;
        match self.repository.leave(connection_id).await {
            Some(departure) => {
                notify_departure(self.message_pusher.as_ref(), departure).await;
                true
            }
            None => false,
        }
    }
}

/// 残りのメンバーに `user-left` を送信
pub(super) async fn notify_departure(message_pusher: &dyn MessagePusher, departure: Departure) {
    let Departure {
        room_id,
        user,
        remaining,
        room_closed,
    } = departure;

    if let Err(e) = message_pusher
        .broadcast(remaining, RoomEvent::UserLeft(user.id.clone()))
        .await
    {
        tracing::warn!("Failed to broadcast user-left: {}", e);
    }
    tracing::info!("User '{}' ({}) left room '{}'", user.id, user.name, room_id);

    if room_closed {
        tracing::info!("Room '{}' is empty and deleted", room_id);
    }
}

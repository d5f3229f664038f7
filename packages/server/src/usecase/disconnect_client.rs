//! UseCase: クライアント切断処理
//!
//! 接続ごとに 1 度だけ呼ばれる終端処理。参加中のルームから退出し（明示的な
//! `leave-room` 後であれば何もしない）、送信チャンネルを登録解除します。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomRepository};

use super::LeaveRoomUseCase;

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    leave_room: LeaveRoomUseCase,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectClientUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            leave_room: LeaveRoomUseCase::new(repository, message_pusher.clone()),
            message_pusher,
        }
    }

    pub async fn execute(&self, connection_id: &ConnectionId) {
        self.leave_room.execute(connection_id).await;
        self.message_pusher.unregister_client(connection_id).await;
    }
}

//! UseCase: クライアント接続処理
//!
//! 新しい接続の送信チャンネルを MessagePusher に登録し、`connection-ack` を返します。
//! ルームへの参加は `join-room` を受け取るまで行いません。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel, RoomEvent};

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectClientUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// 接続を登録し、接続確認を送信
    pub async fn execute(&self, connection_id: ConnectionId, sender: PusherChannel) {
        self.message_pusher
            .register_client(connection_id.clone(), sender)
            .await;

        let ack = RoomEvent::ConnectionAck {
            socket_id: connection_id.clone(),
        };
        if let Err(e) = self.message_pusher.push_to(&connection_id, ack).await {
            tracing::warn!("Failed to send connection-ack to '{}': {}", connection_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockMessagePusher;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_connect_registers_and_acknowledges() {
        // テスト項目: 接続時にチャンネルが登録され、自分の ID を含む connection-ack が届く
        // given (前提条件):
        let mut mock = MockMessagePusher::new();
        mock.expect_register_client()
            .withf(|id, _| id.as_str() == "sid-1")
            .times(1)
            .return_const(());
        mock.expect_push_to()
            .withf(|id, event| {
                id.as_str() == "sid-1"
                    && *event
                        == RoomEvent::ConnectionAck {
                            socket_id: ConnectionId::from("sid-1"),
                        }
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = ConnectClientUseCase::new(Arc::new(mock));
        let (tx, _rx) = mpsc::unbounded_channel();

        // when (操作):
        usecase.execute(ConnectionId::from("sid-1"), tx).await;

        // then (期待する結果): mock の期待回数が drop 時に検証される
    }
}

//! MessagePusher trait 定義
//!
//! クライアントへの通知のインターフェース。UseCase 層は送信先の ID と
//! `RoomEvent` だけを扱い、トランスポートの詳細は Infrastructure 層が隠蔽します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, RoomEvent};

/// Outbound channel of one connection
pub type PusherChannel = mpsc::UnboundedSender<RoomEvent>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// クライアントの送信チャンネルを登録
    async fn register_client(&self, client_id: ConnectionId, sender: PusherChannel);

    /// クライアントの送信チャンネルを登録解除
    async fn unregister_client(&self, client_id: &ConnectionId);

    /// 特定のクライアントに送信
    async fn push_to(
        &self,
        client_id: &ConnectionId,
        event: RoomEvent,
    ) -> Result<(), MessagePushError>;

    /// 複数のクライアントに送信（一部の送信失敗は許容）
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: RoomEvent,
    ) -> Result<(), MessagePushError>;
}

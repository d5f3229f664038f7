//! UseCase: WebRTC シグナリングの中継
//!
//! シグナルの中身は解釈せず、指定された 1 つの接続にだけ転送します。
//! 宛先が既に切断されている場合は黙って破棄します。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelaySignalUseCase::relay_offer() / relay_answer() メソッド
//! - 宛先以外の接続に一切送信しないこと
//!
//! ### なぜこのテストが必要か
//! - シグナルは 1 対 1 の通信であり、ブロードキャストされると他の接続で誤動作する
//!
//! ### どのような状況を想定しているか
//! - 正常系：offer と answer の中継
//! - 異常系：宛先が存在しない

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePushError, MessagePusher, RoomEvent, SignalPayload};

pub struct RelaySignalUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl RelaySignalUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// offer を `user_to_signal` に転送
    ///
    /// `caller_id` はクライアントが指定した値をそのまま転送します。
    pub async fn relay_offer(
        &self,
        user_to_signal: &ConnectionId,
        caller_id: ConnectionId,
        signal: SignalPayload,
    ) -> bool {
        let event = RoomEvent::SignalOffered { signal, caller_id };
        self.deliver(user_to_signal, event).await
    }

    /// answer を `caller_id` に転送
    ///
    /// 応答者の ID はサーバが把握している接続 ID を付けます。
    pub async fn relay_answer(
        &self,
        answerer_id: &ConnectionId,
        caller_id: &ConnectionId,
        signal: SignalPayload,
    ) -> bool {
        let event = RoomEvent::SignalReturned {
            signal,
            id: answerer_id.clone(),
        };
        self.deliver(caller_id, event).await
    }

    async fn deliver(&self, target: &ConnectionId, event: RoomEvent) -> bool {
        match self.message_pusher.push_to(target, event).await {
            Ok(()) => true,
            Err(MessagePushError::ClientNotFound(_)) => {
                tracing::debug!("Signal target '{}' is gone, dropping", target);
                false
            }
            Err(e) => {
                tracing::warn!("Failed to relay signal to '{}': {}", target, e);
                false
            }
        }
    }
}

//! UseCase: チャットメッセージ送信
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - サーバ側で採番した ID・時刻を付けて履歴に追加し、送信者を含む全員に配信すること
//!
//! ### なぜこのテストが必要か
//! - 送信者はサーバが付けた ID・時刻を受け取る必要がある（エコーバック）
//! - 履歴は 50 件で古いものから削除される
//!
//! ### どのような状況を想定しているか
//! - 正常系：2 人のルームでの送信
//! - エッジケース：55 件送信、ゾーン指定付きメッセージ、未参加の接続からの送信

use std::sync::Arc;

use hiroba_shared::time::Clock;

use crate::domain::{
    ChatMessage, ConnectionId, MessageIdFactory, MessagePusher, RoomEvent, RoomRepository,
    Timestamp,
};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
        }
    }

    /// メッセージ送信を実行
    ///
    /// 内容は検証しません。`zone_id` は付加情報としてそのまま配信され、
    /// 配信先の絞り込みはクライアント側で行われます。
    ///
    /// # Returns
    ///
    /// 保存されたメッセージ。ルームに参加していなければ `None`
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        message: String,
        sender: String,
        zone_id: Option<String>,
    ) -> Option<ChatMessage> {
        let now = Timestamp::new(self.clock.now_millis());
        let chat_message = ChatMessage::new(
            MessageIdFactory::generate(now),
            message,
            sender,
            now,
            zone_id,
        );

        // 履歴の順序と receive-message の到着順を一致させる
        let _turn = self.repository.begin_turn().await;
        let members = self
            .repository
            .add_message(connection_id, chat_message.clone())
            .await?;

        tracing::debug!(
            "Message '{}' from '{}' delivered to {} members",
            chat_message.id.as_str(),
            connection_id,
            members.len()
        );
        if let Err(e) = self
            .message_pusher
            .broadcast(members, RoomEvent::ReceiveMessage(chat_message.clone()))
            .await
        {
            tracing::warn!("Failed to broadcast receive-message: {}", e);
        }

        Some(chat_message)
    }
}

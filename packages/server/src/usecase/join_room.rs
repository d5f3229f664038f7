//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - 参加者本人への room-state-sync と、他のメンバーへの user-joined
//!
//! ### なぜこのテストが必要か
//! - room-state-sync はプロトコル上唯一の一括同期であり、内容の過不足が許されない
//! - 別ルームへの移動で古いルームに幽霊ユーザーが残らないことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：空のルームへの参加、既存メンバーがいるルームへの参加
//! - エッジケース：参加中の接続が別ルーム・同じルームへ再参加

use std::sync::Arc;

use hiroba_shared::time::Clock;

use crate::domain::{
    ConnectionId, MessagePusher, Position, RoomEvent, RoomId, RoomRepository, Timestamp, User,
    UserProfile,
};

use super::leave_room::notify_departure;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// ルーム作成時刻の取得元
    clock: Arc<dyn Clock>,
}

impl JoinRoomUseCase {
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

    /// ルーム参加を実行
    ///
    /// 1. 参加中のルームがあれば退出し、そのルームに user-left を送信
    /// 2. ランダムなスポーン位置でユーザーを作成してルームに追加
    /// 3. 参加者本人にのみ room-state-sync を送信
    /// 4. 他のメンバーに user-joined を送信
    ///
    /// # Returns
    ///
    /// 作成されたユーザー
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        room_id: RoomId,
        profile: UserProfile,
    ) -> User {
        let position = Position::random_spawn(&mut rand::rng());
        let now = Timestamp::new(self.clock.now_millis());

        // room-state-sync より前に他の接続の差分が届かないよう、通知まで順番を保持
        let _turn = self.repository.begin_turn().await;
        let joined = self
            .repository
            .join(connection_id, &room_id, profile, position, now)
            .await;

        if let Some(previous) = joined.previous {
            notify_departure(self.message_pusher.as_ref(), previous).await;
        }

        tracing::info!(
            "User '{}' ({}) joined room '{}'",
            connection_id,
            joined.user.name,
            room_id
        );

        let room = joined.room;
        let others = room.member_ids_except(connection_id);
        let user_count = room.users.len();

        let sync = RoomEvent::RoomStateSync {
            users: room.users,
            chat_history: room.chat_history.into_iter().collect(),
            my_user: joined.user.clone(),
            background_image: room.background_image,
        };
        if let Err(e) = self.message_pusher.push_to(connection_id, sync).await {
            tracing::warn!("Failed to send room-state-sync to '{}': {}", connection_id, e);
        }

        if let Err(e) = self
            .message_pusher
            .broadcast(others, RoomEvent::UserJoined(joined.user.clone()))
            .await
        {
            tracing::warn!("Failed to broadcast user-joined: {}", e);
        }

        tracing::info!("Room '{}' has {} users", room_id, user_count);

        joined.user
    }
}

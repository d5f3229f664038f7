//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! 各メソッドは 1 つの不可分な操作です。接続が参照するルームは呼び出しのたびに
//! メンバーシップ索引から解決され、呼び出し側がルームを保持し続けることはありません。
//! 接続がどのルームにも参加していない場合は `None` を返します。
//!
//! 状態の変更とその通知の送信を他の接続と混ざらない 1 つの単位にするため、
//! 変更を行う UseCase は `begin_turn` の戻り値を通知の送信が終わるまで保持します。

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use super::{
    ChatMessage, ConnectionId, Departure, Joined, Position, RepositoryError, Room, RoomId,
    ScreenShareSize, Timestamp, UserProfile,
};

/// Room Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
/// ルーム状態の変更と通知を直列化する順番。保持している間、他の接続の
/// 変更と通知は待たされる
pub type RoomTurn = OwnedMutexGuard<()>;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// 変更と通知の順番を取得する（同じ Repository を使う全ての接続で共有）
    async fn begin_turn(&self) -> RoomTurn;

    /// 接続をルームに参加させる（参加中のルームがあれば先に退出する）
    async fn join(
        &self,
        connection_id: &ConnectionId,
        room_id: &RoomId,
        profile: UserProfile,
        position: Position,
        now: Timestamp,
    ) -> Joined;

    /// 接続を現在のルームから退出させ、空になったルームを削除する
    async fn leave(&self, connection_id: &ConnectionId) -> Option<Departure>;

    /// 位置を上書きし、他のメンバーを返す
    async fn update_position(
        &self,
        connection_id: &ConnectionId,
        position: Position,
    ) -> Option<Vec<ConnectionId>>;

    /// 画面共有状態を更新し、他のメンバーを返す
    async fn set_screen_sharing(
        &self,
        connection_id: &ConnectionId,
        is_screen_sharing: bool,
    ) -> Option<Vec<ConnectionId>>;

    /// 画面共有サイズを更新し、他のメンバーを返す
    async fn set_screen_share_size(
        &self,
        connection_id: &ConnectionId,
        size: ScreenShareSize,
    ) -> Option<Vec<ConnectionId>>;

    /// メッセージを履歴に追加し、送信者を含む全メンバーを返す
    async fn add_message(
        &self,
        connection_id: &ConnectionId,
        message: ChatMessage,
    ) -> Option<Vec<ConnectionId>>;

    /// 背景画像を設定し、送信者を含む全メンバーを返す
    async fn set_background(
        &self,
        connection_id: &ConnectionId,
        url: String,
    ) -> Option<Vec<ConnectionId>>;

    /// 接続が参加しているルームの全メンバーを返す
    async fn get_room_members(&self, connection_id: &ConnectionId) -> Option<Vec<ConnectionId>>;

    /// Room を取得
    async fn get_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError>;

    /// 存在する全ての Room を取得
    async fn get_rooms(&self) -> Vec<Room>;
}

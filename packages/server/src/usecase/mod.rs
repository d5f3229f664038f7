//! UseCase layer
//!
//! 1 つのクライアントイベントに対応する処理を 1 つの UseCase として実装します。
//! UseCase は Repository と MessagePusher の trait にのみ依存します。
//! 接続がルームに参加していない場合、ルームに関する UseCase は何もしません。

mod change_background;
mod connect_client;
mod disconnect_client;
mod error;
mod get_room_detail;
mod get_rooms;
mod join_room;
mod leave_room;
mod move_user;
mod relay_signal;
mod screen_share;
mod send_message;
mod send_reaction;

#[cfg(test)]
mod test_support;

pub use change_background::ChangeBackgroundUseCase;
pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::GetRoomDetailError;
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use move_user::MoveUserUseCase;
pub use relay_signal::RelaySignalUseCase;
pub use screen_share::ScreenShareUseCase;
pub use send_message::SendMessageUseCase;
pub use send_reaction::SendReactionUseCase;

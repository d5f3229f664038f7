//! Server state shared by the socket.io and HTTP handlers.

use std::sync::Arc;

use hiroba_shared::time::Clock;

use crate::{
    domain::{MessagePusher, RoomRepository},
    usecase::{
        ChangeBackgroundUseCase, ConnectClientUseCase, DisconnectClientUseCase,
        GetRoomDetailUseCase, GetRoomsUseCase, JoinRoomUseCase, LeaveRoomUseCase,
        MoveUserUseCase, RelaySignalUseCase, ScreenShareUseCase, SendMessageUseCase,
        SendReactionUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// ConnectClientUseCase（接続のユースケース）
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    /// DisconnectClientUseCase（切断のユースケース）
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    pub leave_room_usecase: Arc<LeaveRoomUseCase>,
    pub move_user_usecase: Arc<MoveUserUseCase>,
    pub send_message_usecase: Arc<SendMessageUseCase>,
    pub send_reaction_usecase: Arc<SendReactionUseCase>,
    pub screen_share_usecase: Arc<ScreenShareUseCase>,
    pub change_background_usecase: Arc<ChangeBackgroundUseCase>,
    pub relay_signal_usecase: Arc<RelaySignalUseCase>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（ルーム詳細取得のユースケース）
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
}

impl AppState {
    /// Repository と MessagePusher から全ての UseCase を組み立てる
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            connect_client_usecase: Arc::new(ConnectClientUseCase::new(message_pusher.clone())),
            disconnect_client_usecase: Arc::new(DisconnectClientUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            join_room_usecase: Arc::new(JoinRoomUseCase::new(
                repository.clone(),
                message_pusher.clone(),
                clock.clone(),
            )),
            leave_room_usecase: Arc::new(LeaveRoomUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            move_user_usecase: Arc::new(MoveUserUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            send_message_usecase: Arc::new(SendMessageUseCase::new(
                repository.clone(),
                message_pusher.clone(),
                clock,
            )),
            send_reaction_usecase: Arc::new(SendReactionUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            screen_share_usecase: Arc::new(ScreenShareUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            change_background_usecase: Arc::new(ChangeBackgroundUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            relay_signal_usecase: Arc::new(RelaySignalUseCase::new(message_pusher)),
            get_rooms_usecase: Arc::new(GetRoomsUseCase::new(repository.clone())),
            get_room_detail_usecase: Arc::new(GetRoomDetailUseCase::new(repository)),
        }
    }
}

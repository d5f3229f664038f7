//! socket.io connection handlers.
//!
//! socketioxide は受信イベントごとにハンドラを呼び出すため、ハンドラ内では
//! UseCase を直接実行せず、接続ごとのキューに積むだけにします。キューは
//! 接続ごとに 1 つのタスクが到着順に処理します。

use std::sync::Arc;

use serde::de::DeserializeOwned;
use socketioxide::{
    extract::{Data, SocketRef},
    socket::DisconnectReason,
};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, RoomEvent, RoomId, UserProfile},
    infrastructure::dto::socketio::{
        JoinRoomRequest, PositionDto, ReturningSignalRequest, SendMessageRequest,
        SendReactionRequest, SendingSignalRequest, SizeDto, encode_event,
    },
    ui::state::AppState,
};

/// クライアントから受信したイベント
#[derive(Debug)]
enum InboundEvent {
    JoinRoom(JoinRoomRequest),
    Move(PositionDto),
    SendMessage(SendMessageRequest),
    SendReaction(SendReactionRequest),
    ScreenShareState(bool),
    ScreenShareSize(SizeDto),
    ChangeBackground(String),
    SendingSignal(SendingSignalRequest),
    ReturningSignal(ReturningSignalRequest),
    LeaveRoom,
    Disconnect,
}

type InboundSender = mpsc::UnboundedSender<InboundEvent>;

/// Namespace `/` の接続ハンドラ
pub fn on_connect(socket: SocketRef, state: Arc<AppState>) {
    let connection_id = ConnectionId::new(socket.id.to_string());
    tracing::info!("Client '{}' connected", connection_id);

    let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
    let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();

    forward(&socket, "join-room", &inbound_tx, InboundEvent::JoinRoom);
    forward(&socket, "user-move", &inbound_tx, InboundEvent::Move);
    forward(&socket, "send-message", &inbound_tx, InboundEvent::SendMessage);
    forward(&socket, "send-reaction", &inbound_tx, InboundEvent::SendReaction);
    forward(
        &socket,
        "screen-share-state",
        &inbound_tx,
        InboundEvent::ScreenShareState,
    );
    forward(
        &socket,
        "screen-share-size",
        &inbound_tx,
        InboundEvent::ScreenShareSize,
    );
    forward(
        &socket,
        "change-background",
        &inbound_tx,
        InboundEvent::ChangeBackground,
    );
    forward(
        &socket,
        "sending-signal",
        &inbound_tx,
        InboundEvent::SendingSignal,
    );
    forward(
        &socket,
        "returning-signal",
        &inbound_tx,
        InboundEvent::ReturningSignal,
    );

    socket.on("leave-room", {
        let tx = inbound_tx.clone();
        move |_: SocketRef| {
            let _ = tx.send(InboundEvent::LeaveRoom);
        }
    });

    socket.on_disconnect({
        let tx = inbound_tx;
        move |socket: SocketRef, reason: DisconnectReason| {
            tracing::info!("Client '{}' disconnected: {:?}", socket.id, reason);
            let _ = tx.send(InboundEvent::Disconnect);
        }
    });

    tokio::spawn(pusher_loop(socket, outbound_rx));
    tokio::spawn(dispatch_loop(state, connection_id, outbound_tx, inbound_rx));
}

/// イベント `event` のペイロードを `wrap` で包んでキューに積むハンドラを登録
///
/// ペイロードが `T` として読めない場合、ハンドラは呼ばれずイベントは破棄されます。
fn forward<T>(
    socket: &SocketRef,
    event: &'static str,
    tx: &InboundSender,
    wrap: fn(T) -> InboundEvent,
) where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let tx = tx.clone();
    socket.on(event, move |Data::<T>(data)| {
        let _ = tx.send(wrap(data));
    });
}

/// 送信チャンネルに届いたイベントを socket.io で送信する
///
/// 接続の送信チャンネルが登録解除されると終了します。
async fn pusher_loop(socket: SocketRef, mut rx: mpsc::UnboundedReceiver<RoomEvent>) {
    while let Some(event) = rx.recv().await {
        let name = event.name();
        let payload = match encode_event(event) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to encode '{}': {}", name, e);
                continue;
            }
        };
        if let Err(e) = socket.emit(name, &payload) {
            tracing::debug!("Failed to emit '{}' to '{}': {}", name, socket.id, e);
        }
    }
}

/// 接続のイベントを到着順に UseCase へ渡す
///
/// キューが終わる（切断される）と、退出と送信チャンネルの登録解除を 1 度だけ行います。
async fn dispatch_loop(
    state: Arc<AppState>,
    connection_id: ConnectionId,
    outbound_tx: mpsc::UnboundedSender<RoomEvent>,
    mut inbound_rx: mpsc::UnboundedReceiver<InboundEvent>,
) {
    state
        .connect_client_usecase
        .execute(connection_id.clone(), outbound_tx)
        .await;

    while let Some(event) = inbound_rx.recv().await {
        match event {
            InboundEvent::JoinRoom(request) => {
                state
                    .join_room_usecase
                    .execute(
                        &connection_id,
                        RoomId::new(request.room_id),
                        UserProfile::from(request.user),
                    )
                    .await;
            }
            InboundEvent::Move(position) => {
                state
                    .move_user_usecase
                    .execute(&connection_id, position.into())
                    .await;
            }
            InboundEvent::SendMessage(request) => {
                state
                    .send_message_usecase
                    .execute(
                        &connection_id,
                        request.message,
                        request.sender,
                        request.zone_id,
                    )
                    .await;
            }
            InboundEvent::SendReaction(request) => {
                state
                    .send_reaction_usecase
                    .execute(&connection_id, request.emoji, request.position.into())
                    .await;
            }
            InboundEvent::ScreenShareState(is_screen_sharing) => {
                state
                    .screen_share_usecase
                    .set_state(&connection_id, is_screen_sharing)
                    .await;
            }
            InboundEvent::ScreenShareSize(size) => {
                state
                    .screen_share_usecase
                    .set_size(&connection_id, size.into())
                    .await;
            }
            InboundEvent::ChangeBackground(url) => {
                state
                    .change_background_usecase
                    .execute(&connection_id, url)
                    .await;
            }
            InboundEvent::SendingSignal(request) => {
                state
                    .relay_signal_usecase
                    .relay_offer(
                        &ConnectionId::new(request.user_to_signal),
                        ConnectionId::new(request.caller_id),
                        request.signal,
                    )
                    .await;
            }
            InboundEvent::ReturningSignal(request) => {
                state
                    .relay_signal_usecase
                    .relay_answer(
                        &connection_id,
                        &ConnectionId::new(request.caller_id),
                        request.signal,
                    )
                    .await;
            }
            InboundEvent::LeaveRoom => {
                state.leave_room_usecase.execute(&connection_id).await;
            }
            InboundEvent::Disconnect => break,
        }
    }

    state
        .disconnect_client_usecase
        .execute(&connection_id)
        .await;
    tracing::info!("Client '{}' cleaned up", connection_id);
}

//! socket.io event payloads.
//!
//! Field names follow the browser client (`camelCase`, plus the `callerID`
//! spelling used by the signaling events). Payload shapes are trusted: a
//! payload that does not deserialize is dropped before it reaches a handler.

use serde::{Deserialize, Serialize};

use crate::domain::{RoomEvent, SignalPayload};

// ========================================
// Inbound (client → server)
// ========================================

/// `join-room`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomRequest {
    pub room_id: String,
    #[serde(default)]
    pub user: JoinUserDto,
}

/// `null` も省略と同じく既定値（`UserProfile::new`）になる
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JoinUserDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// `send-message`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub message: String,
    pub sender: String,
    #[serde(default)]
    pub zone_id: Option<String>,
}

/// `send-reaction`
#[derive(Debug, Clone, Deserialize)]
pub struct SendReactionRequest {
    pub emoji: String,
    pub position: PositionDto,
}

/// `sending-signal`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendingSignalRequest {
    pub user_to_signal: String,
    #[serde(rename = "callerID")]
    pub caller_id: String,
    pub signal: SignalPayload,
}

/// `returning-signal`
#[derive(Debug, Clone, Deserialize)]
pub struct ReturningSignalRequest {
    pub signal: SignalPayload,
    #[serde(rename = "callerID")]
    pub caller_id: String,
}

// ========================================
// Shared
// ========================================

/// `user-move` payload and the position field of users/reactions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionDto {
    pub x: f64,
    pub y: f64,
}

/// `screen-share-size` payload and the size field of users
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeDto {
    pub width: f64,
    pub height: f64,
}

// ========================================
// Outbound (server → client)
// ========================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionAckDto {
    pub socket_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub position: PositionDto,
    pub is_screen_sharing: bool,
    pub screen_share_size: SizeDto,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDto {
    pub id: String,
    pub message: String,
    pub sender: String,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStateSyncDto {
    pub users: Vec<UserDto>,
    pub chat_history: Vec<ChatMessageDto>,
    pub my_user: UserDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserMovedDto {
    pub id: String,
    pub position: PositionDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenShareStateDto {
    pub id: String,
    pub is_screen_sharing: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreenShareSizeDto {
    pub id: String,
    pub size: SizeDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignalOfferedDto {
    pub signal: SignalPayload,
    #[serde(rename = "callerID")]
    pub caller_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignalReturnedDto {
    pub signal: SignalPayload,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReactionDto {
    pub id: String,
    pub emoji: String,
    pub position: PositionDto,
}

/// Encode a room event as the JSON payload emitted under `event.name()`.
///
/// `user-left` and `background-updated` carry a bare string, as the browser
/// client expects.
pub fn encode_event(event: RoomEvent) -> serde_json::Result<serde_json::Value> {
    match event {
        RoomEvent::ConnectionAck { socket_id } => serde_json::to_value(ConnectionAckDto {
            socket_id: socket_id.into_string(),
        }),
        RoomEvent::RoomStateSync {
            users,
            chat_history,
            my_user,
            background_image,
        } => serde_json::to_value(RoomStateSyncDto {
            users: users.into_iter().map(UserDto::from).collect(),
            chat_history: chat_history.into_iter().map(ChatMessageDto::from).collect(),
            my_user: my_user.into(),
            background_image,
        }),
        RoomEvent::UserJoined(user) => serde_json::to_value(UserDto::from(user)),
        RoomEvent::UserMoved { id, position } => serde_json::to_value(UserMovedDto {
            id: id.into_string(),
            position: position.into(),
        }),
        RoomEvent::ReceiveMessage(message) => {
            serde_json::to_value(ChatMessageDto::from(message))
        }
        RoomEvent::UserLeft(id) => serde_json::to_value(id.into_string()),
        RoomEvent::BackgroundUpdated(url) => serde_json::to_value(url),
        RoomEvent::ScreenShareState {
            id,
            is_screen_sharing,
        } => serde_json::to_value(ScreenShareStateDto {
            id: id.into_string(),
            is_screen_sharing,
        }),
        RoomEvent::ScreenShareSize { id, size } => serde_json::to_value(ScreenShareSizeDto {
            id: id.into_string(),
            size: size.into(),
        }),
        RoomEvent::SignalOffered { signal, caller_id } => {
            serde_json::to_value(SignalOfferedDto {
                signal,
                caller_id: caller_id.into_string(),
            })
        }
        RoomEvent::SignalReturned { signal, id } => serde_json::to_value(SignalReturnedDto {
            signal,
            id: id.into_string(),
        }),
        RoomEvent::ReceiveReaction {
            id,
            emoji,
            position,
        } => serde_json::to_value(ReactionDto {
            id: id.into_string(),
            emoji,
            position: position.into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ChatMessage, ConnectionId, MessageId, Position, ScreenShareSize, Timestamp, User,
        UserProfile,
    };
    use serde_json::json;

    fn alice() -> User {
        User::new(
            ConnectionId::from("sid-alice"),
            UserProfile::new("Alice".to_string(), String::new()),
            Position::new(120.0, 340.0),
        )
    }

    #[test]
    fn test_parse_join_room_request() {
        // テスト項目: join-room のペイロードが読み取れ、user が省略されても既定値になる
        // given (前提条件):
        let full = json!({"roomId": "lobby", "user": {"name": "Alice", "avatar": "default"}});
        let minimal = json!({"roomId": "lobby"});

        // when (操作):
        let full: JoinRoomRequest = serde_json::from_value(full).unwrap();
        let minimal: JoinRoomRequest = serde_json::from_value(minimal).unwrap();

        // then (期待する結果):
        assert_eq!(full.room_id, "lobby");
        assert_eq!(full.user.name.as_deref(), Some("Alice"));
        assert_eq!(minimal.user.name, None);
    }

    #[test]
    fn test_parse_join_room_request_with_null_profile() {
        // テスト項目: name / avatar が null でも join-room は破棄されず、既定値のプロフィールになる
        // given (前提条件):
        let payload = json!({"roomId": "lobby", "user": {"name": null, "avatar": null}});

        // when (操作):
        let request: JoinRoomRequest = serde_json::from_value(payload).unwrap();
        let profile = UserProfile::from(request.user);

        // then (期待する結果):
        assert_eq!(profile.name, UserProfile::DEFAULT_NAME);
        assert_eq!(profile.avatar, UserProfile::DEFAULT_AVATAR);
    }

    #[test]
    fn test_parse_signal_requests_keep_payload_opaque() {
        // テスト項目: シグナルのペイロードは解釈されずそのまま保持される
        // given (前提条件):
        let signal = json!({"type": "offer", "sdp": "v=0\r\n", "extra": [1, 2, 3]});
        let offer = json!({"userToSignal": "x", "callerID": "y", "signal": signal});
        let answer = json!({"signal": "anything", "callerID": "y"});

        // when (操作):
        let offer: SendingSignalRequest = serde_json::from_value(offer).unwrap();
        let answer: ReturningSignalRequest = serde_json::from_value(answer).unwrap();

        // then (期待する結果):
        assert_eq!(offer.user_to_signal, "x");
        assert_eq!(offer.caller_id, "y");
        assert_eq!(offer.signal, signal);
        assert_eq!(answer.signal, json!("anything"));
    }

    #[test]
    fn test_parse_send_message_with_null_zone() {
        // テスト項目: zoneId が null または省略の場合はグローバルメッセージになる
        // given (前提条件):
        let with_null = json!({"message": "hi", "sender": "Alice", "zoneId": null});
        let with_zone = json!({"message": "hi", "sender": "Alice", "zoneId": "meeting-room-1"});

        // when (操作):
        let with_null: SendMessageRequest = serde_json::from_value(with_null).unwrap();
        let with_zone: SendMessageRequest = serde_json::from_value(with_zone).unwrap();

        // then (期待する結果):
        assert_eq!(with_null.zone_id, None);
        assert_eq!(with_zone.zone_id.as_deref(), Some("meeting-room-1"));
    }

    #[test]
    fn test_encode_user_joined() {
        // テスト項目: user-joined はクライアントの User 形式（camelCase）で送られる
        // given (前提条件):
        let event = RoomEvent::UserJoined(alice());

        // when (操作):
        let payload = encode_event(event).unwrap();

        // then (期待する結果):
        assert_eq!(
            payload,
            json!({
                "id": "sid-alice",
                "name": "Alice",
                "avatar": "default",
                "position": {"x": 120.0, "y": 340.0},
                "isScreenSharing": false,
                "screenShareSize": {"width": 480.0, "height": 360.0}
            })
        );
    }

    #[test]
    fn test_encode_room_state_sync_omits_missing_background() {
        // テスト項目: 背景画像が未設定なら room-state-sync に backgroundImage は含まれない
        // given (前提条件):
        let message = ChatMessage::new(
            MessageId::new("1m".to_string()),
            "hi".to_string(),
            "Alice".to_string(),
            Timestamp::new(5),
            None,
        );
        let event = RoomEvent::RoomStateSync {
            users: vec![alice()],
            chat_history: vec![message],
            my_user: alice(),
            background_image: None,
        };

        // when (操作):
        let payload = encode_event(event).unwrap();

        // then (期待する結果):
        assert!(payload.get("backgroundImage").is_none());
        assert_eq!(payload["myUser"]["id"], "sid-alice");
        assert_eq!(payload["chatHistory"][0]["timestamp"], 5);
        assert!(payload["chatHistory"][0].get("zoneId").is_none());
    }

    #[test]
    fn test_encode_bare_string_events() {
        // テスト項目: user-left と background-updated は文字列そのものを送る
        // given (前提条件):
        let left = RoomEvent::UserLeft(ConnectionId::from("sid-bob"));
        let background = RoomEvent::BackgroundUpdated("data:image/png;base64,AAAA".to_string());

        // when (操作):
        let left = encode_event(left).unwrap();
        let background = encode_event(background).unwrap();

        // then (期待する結果):
        assert_eq!(left, json!("sid-bob"));
        assert_eq!(background, json!("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_encode_signal_events_use_caller_id_spelling() {
        // テスト項目: シグナル転送イベントは callerID / id を付けてペイロードをそのまま送る
        // given (前提条件):
        let signal = json!({"sdp": "v=0"});
        let offered = RoomEvent::SignalOffered {
            signal: signal.clone(),
            caller_id: ConnectionId::from("y"),
        };
        let returned = RoomEvent::SignalReturned {
            signal: signal.clone(),
            id: ConnectionId::from("x"),
        };

        // when (操作):
        let offered = encode_event(offered).unwrap();
        let returned = encode_event(returned).unwrap();

        // then (期待する結果):
        assert_eq!(offered, json!({"signal": signal, "callerID": "y"}));
        assert_eq!(returned, json!({"signal": signal, "id": "x"}));
    }

    #[test]
    fn test_encode_screen_share_events() {
        // テスト項目: 画面共有イベントの形式
        // given (前提条件):
        let state = RoomEvent::ScreenShareState {
            id: ConnectionId::from("a"),
            is_screen_sharing: true,
        };
        let size = RoomEvent::ScreenShareSize {
            id: ConnectionId::from("a"),
            size: ScreenShareSize::new(640.0, 480.0),
        };

        // when (操作):
        let state = encode_event(state).unwrap();
        let size = encode_event(size).unwrap();

        // then (期待する結果):
        assert_eq!(state, json!({"id": "a", "isScreenSharing": true}));
        assert_eq!(size, json!({"id": "a", "size": {"width": 640.0, "height": 480.0}}));
    }
}

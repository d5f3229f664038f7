//! Conversion logic between DTOs and domain entities.

use hiroba_shared::time::timestamp_to_rfc3339;

use crate::domain::{ChatMessage, Position, Room, ScreenShareSize, User, UserProfile};
use crate::infrastructure::dto::{
    http::{RoomDetailDto, RoomSummaryDto, UserDetailDto},
    socketio::{ChatMessageDto, JoinUserDto, PositionDto, SizeDto, UserDto},
};

// ========================================
// DTO → Domain
// ========================================

impl From<PositionDto> for Position {
    fn from(dto: PositionDto) -> Self {
        Position::new(dto.x, dto.y)
    }
}

impl From<JoinUserDto> for UserProfile {
    fn from(dto: JoinUserDto) -> Self {
        UserProfile::new(
            dto.name.unwrap_or_default(),
            dto.avatar.unwrap_or_default(),
        )
    }
}

impl From<SizeDto> for ScreenShareSize {
    fn from(dto: SizeDto) -> Self {
        ScreenShareSize::new(dto.width, dto.height)
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<Position> for PositionDto {
    fn from(model: Position) -> Self {
        Self {
            x: model.x,
            y: model.y,
        }
    }
}

impl From<ScreenShareSize> for SizeDto {
    fn from(model: ScreenShareSize) -> Self {
        Self {
            width: model.width,
            height: model.height,
        }
    }
}

impl From<User> for UserDto {
    fn from(model: User) -> Self {
        Self {
            id: model.id.into_string(),
            name: model.name,
            avatar: model.avatar,
            position: model.position.into(),
            is_screen_sharing: model.is_screen_sharing,
            screen_share_size: model.screen_share_size.into(),
        }
    }
}

impl From<ChatMessage> for ChatMessageDto {
    fn from(model: ChatMessage) -> Self {
        Self {
            id: model.id.into_string(),
            message: model.message,
            sender: model.sender,
            timestamp: model.timestamp.value(),
            zone_id: model.zone_id,
        }
    }
}

impl From<User> for UserDetailDto {
    fn from(model: User) -> Self {
        Self {
            id: model.id.into_string(),
            name: model.name,
            avatar: model.avatar,
            position: model.position.into(),
            is_screen_sharing: model.is_screen_sharing,
        }
    }
}

impl From<Room> for RoomSummaryDto {
    fn from(model: Room) -> Self {
        Self {
            id: model.id.as_str().to_string(),
            user_count: model.users.len(),
            users: model.users.into_iter().map(|u| u.name).collect(),
            created_at: timestamp_to_rfc3339(model.created_at.value()),
        }
    }
}

impl From<Room> for RoomDetailDto {
    fn from(model: Room) -> Self {
        Self {
            id: model.id.into_string(),
            users: model.users.into_iter().map(UserDetailDto::from).collect(),
            chat_history_len: model.chat_history.len(),
            background_image: model.background_image,
            created_at: timestamp_to_rfc3339(model.created_at.value()),
        }
    }
}

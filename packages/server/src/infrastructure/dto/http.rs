//! HTTP API response DTOs.

use serde::Serialize;

use super::socketio::PositionDto;

/// Entry of `GET /api/rooms`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSummaryDto {
    pub id: String,
    pub user_count: usize,
    /// Display names in join order
    pub users: Vec<String>,
    pub created_at: String,
}

/// Response of `GET /api/rooms/{room_id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub users: Vec<UserDetailDto>,
    pub chat_history_len: usize,
    pub background_image: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDetailDto {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub position: PositionDto,
    pub is_screen_sharing: bool,
}

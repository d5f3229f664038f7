//! UseCase errors

use thiserror::Error;

/// Errors of `GetRoomDetailUseCase`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("Room not found")]
    RoomNotFound,
}

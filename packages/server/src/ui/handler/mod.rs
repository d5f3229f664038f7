//! Request and event handlers.

mod http;
mod socketio;

pub use http::{get_room_detail, get_rooms, health_check};
pub use socketio::on_connect;

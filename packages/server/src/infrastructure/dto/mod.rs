//! Data Transfer Objects (DTOs).
//!
//! DTOs are organized by protocol:
//! - `socketio`: socket.io event payloads (camelCase, compatible with the browser client)
//! - `http`: HTTP API response DTOs

pub mod conversion;
pub mod http;
pub mod socketio;

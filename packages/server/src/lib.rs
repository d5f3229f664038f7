//! Room presence and real-time coordination server for Hiroba, a browser-based
//! virtual office.
//!
//! Clients connect over socket.io, join named rooms and exchange positions,
//! chat, media state and WebRTC signaling through the server.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

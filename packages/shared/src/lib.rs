//! Utilities shared by the Hiroba crates.

pub mod logger;
pub mod time;

//! Value Objects
//!
//! 識別子や座標など、値そのものに意味があるドメインの値を表します。

use rand::Rng;

/// Default width of a screen-share window
pub const DEFAULT_SCREEN_SHARE_WIDTH: f64 = 480.0;
/// Default height of a screen-share window
pub const DEFAULT_SCREEN_SHARE_HEIGHT: f64 = 360.0;

/// Lower bound (inclusive) of the spawn range on each axis
pub const SPAWN_MIN: f64 = 100.0;
/// Upper bound (exclusive) of the spawn range on each axis
pub const SPAWN_MAX: f64 = 600.0;

/// Transport session identifier, doubling as the user id for the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConnectionId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ConnectionId {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Room identifier. Any string is a valid room id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for RoomId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for RoomId {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Chat message identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Unix timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// A point in the shared 2D space. No bounds are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Uniform spawn point in `[SPAWN_MIN, SPAWN_MAX)` on each axis.
    ///
    /// Only spreads newcomers out; overlapping spawns are possible.
    pub fn random_spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.random_range(SPAWN_MIN..SPAWN_MAX),
            y: rng.random_range(SPAWN_MIN..SPAWN_MAX),
        }
    }
}

/// Screen-share window dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenShareSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenShareSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for ScreenShareSize {
    fn default() -> Self {
        Self::new(DEFAULT_SCREEN_SHARE_WIDTH, DEFAULT_SCREEN_SHARE_HEIGHT)
    }
}

/// Display profile supplied by the client at join time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub avatar: String,
}

impl UserProfile {
    pub const DEFAULT_NAME: &'static str = "Guest";
    pub const DEFAULT_AVATAR: &'static str = "default";

    /// Empty values fall back to the defaults; nothing else is checked.
    pub fn new(name: String, avatar: String) -> Self {
        Self {
            name: if name.is_empty() {
                Self::DEFAULT_NAME.to_string()
            } else {
                name
            },
            avatar: if avatar.is_empty() {
                Self::DEFAULT_AVATAR.to_string()
            } else {
                avatar
            },
        }
    }
}

//! Factories for server-generated identifiers.

use uuid::Uuid;

use super::value_object::{MessageId, Timestamp};

/// Length of the random suffix appended to message ids
const MESSAGE_ID_SUFFIX_LEN: usize = 9;

pub struct MessageIdFactory;

impl MessageIdFactory {
    /// Send time in milliseconds followed by a random suffix.
    pub fn generate(now: Timestamp) -> MessageId {
        let suffix = Uuid::new_v4().simple().to_string();
        MessageId::new(format!(
            "{}{}",
            now.value(),
            &suffix[..MESSAGE_ID_SUFFIX_LEN]
        ))
    }
}

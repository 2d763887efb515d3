//! Record identifier generation.

use uuid::Uuid;

/// Length of an identifier produced by [`new_record_id`].
pub const RECORD_ID_LEN: usize = 32;

/// Generate a fresh record identifier: a random 128-bit value rendered as
/// 32 lowercase hex characters, no hyphens.
pub fn new_record_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Whether `s` has the shape of an identifier produced by [`new_record_id`].
pub fn is_record_id(s: &str) -> bool {
    s.len() == RECORD_ID_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

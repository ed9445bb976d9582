//! ID generation utilities.

use uuid::Uuid;

/// Generates a new UUID v7 as a string.
///
/// This is the id format for every pair created by the editor. UUID v7
/// embeds a timestamp, so ids are never reused within a process.
#[must_use]
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

//! Deterministic JSON serialization for settings files.
//!
//! Output is 2-space indented with a trailing newline. Key order is stable
//! as long as the source types use `BTreeMap`.

mod json;

pub use json::{SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes};

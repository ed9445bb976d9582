//! Courier Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus settings persistence and
//! logging setup for the binary.

pub mod adapters;
pub mod http;
pub mod logging;
pub mod persistence;
pub mod serialization;

pub use adapters::{
    ActiveWorkspaceState, InMemoryQueryCache, InMemoryRouter, InMemoryViewModeStore, Location,
    SystemClock, TracingAnalytics,
};
pub use http::{FORM_URLENCODED_CONTENT_TYPE, FormEncodeError, encode_form};
pub use persistence::{LOG_ENV_VAR, SettingsError, SettingsRepository};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes};

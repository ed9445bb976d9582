//! Courier Application - Editing models, ports and command mutations
//!
//! This crate defines the application layer with:
//! - Port traits for the backend, prompt, cache and router collaborators
//! - The pair-list editing model and the editors built on it
//! - The mutation wrapper and the concrete commands dispatched through it
//! - Application-level error handling

pub mod commands;
pub mod error;
pub mod form_editor;
pub mod mutation;
pub mod pair_editor;
pub mod ports;
pub mod text_input;

pub use commands::{CommandContext, Commands};
pub use error::{ApplicationError, ApplicationResult};
pub use form_editor::{FORM_URLENCODED_PREFERENCE, FormUrlencodedEditor, form_pairs, form_state_key};
pub use mutation::{
    BoxError, BoxFuture, MutationDescriptor, MutationHandle, MutationKey, Settled, create_mutation,
};
pub use pair_editor::{PairEditorOptions, PairListModel};
pub use text_input::{InputKind, TextInputModel, Validation};

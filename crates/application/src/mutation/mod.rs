//! Command mutations: invoke one backend operation and react to its outcome.
//!
//! A [`MutationDescriptor`] binds a [`MutationKey`], the operation and its
//! optional lifecycle hooks. [`create_mutation`] turns it into a reusable
//! [`MutationHandle`]. For a single run the stages always execute in this
//! order:
//!
//! 1. the operation
//! 2. `on_success` (awaited) or `on_error`
//! 3. `on_settled`
//!
//! Across independent runs no ordering is guaranteed. Runs are not
//! single-flight; callers that want to disable an affordance while a
//! mutation is running can watch [`MutationHandle::in_flight`].

mod descriptor;
mod handle;
mod key;

pub use descriptor::{MutationDescriptor, Settled};
pub use handle::{MutationHandle, create_mutation};
pub use key::MutationKey;

pub use futures::future::BoxFuture;

/// Error type of `on_settled` hooks, which are logged and discarded.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

//! Mutation descriptors.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;

use super::{BoxError, BoxFuture, MutationKey};

pub(super) type Operation<I, O, E> = Arc<dyn Fn(I) -> BoxFuture<'static, Result<O, E>> + Send + Sync>;
pub(super) type SuccessHook<I, O, E> =
    Arc<dyn Fn(&O, &I) -> BoxFuture<'static, Result<(), E>> + Send + Sync>;
pub(super) type ErrorHook<I, E> = Arc<dyn Fn(&E, &I) + Send + Sync>;
pub(super) type SettledHook<I, O, E> =
    Arc<dyn Fn(Settled<'_, O, E>, &I) -> BoxFuture<'static, Result<(), BoxError>> + Send + Sync>;

/// Outcome of a run as seen by `on_settled`.
#[derive(Debug)]
pub enum Settled<'a, O, E> {
    /// The operation and `on_success` both succeeded.
    Success(&'a O),
    /// The operation or `on_success` failed.
    Failure(&'a E),
}

impl<O, E> Settled<'_, O, E> {
    /// Returns true for a successful run.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl<O, E> Clone for Settled<'_, O, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, E> Copy for Settled<'_, O, E> {}

/// Describes one command: its key, its operation and its lifecycle hooks.
///
/// Descriptors are built once per action type; constructing one performs
/// no I/O.
pub struct MutationDescriptor<I, O, E> {
    pub(super) key: MutationKey,
    pub(super) operation: Operation<I, O, E>,
    pub(super) on_success: Option<SuccessHook<I, O, E>>,
    pub(super) on_error: Option<ErrorHook<I, E>>,
    pub(super) on_settled: Option<SettledHook<I, O, E>>,
}

impl<I, O, E> MutationDescriptor<I, O, E>
where
    I: 'static,
    O: 'static,
    E: 'static,
{
    /// Creates a descriptor for `operation`.
    pub fn new<F, Fut>(key: impl Into<MutationKey>, operation: F) -> Self
    where
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<O, E>> + Send + 'static,
    {
        Self {
            key: key.into(),
            operation: boxed_operation(move |input| operation(input).boxed()),
            on_success: None,
            on_error: None,
            on_settled: None,
        }
    }

    /// Runs after a successful operation, before the run is settled.
    ///
    /// The hook may be called again with an identical result when the user
    /// retries, so its side effects must be idempotent. An error returned
    /// here becomes the error of the run.
    #[must_use]
    pub fn on_success<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(&O, &I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
    {
        self.on_success = Some(boxed_success(move |output, input| hook(output, input).boxed()));
        self
    }

    /// Observes a failed run. The error still propagates to the caller.
    #[must_use]
    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&E, &I) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(hook));
        self
    }

    /// Runs last, whatever the outcome. Its failures are logged and dropped.
    #[must_use]
    pub fn on_settled<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(Settled<'_, O, E>, &I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
    {
        self.on_settled = Some(boxed_settled(move |settled, input| hook(settled, input).boxed()));
        self
    }

    /// Returns the mutation key.
    #[must_use]
    pub const fn key(&self) -> &MutationKey {
        &self.key
    }
}

// The helpers below pin each closure's signature, including the
// higher-ranked reference arguments, to the boxed hook type.

fn boxed_operation<I, O, E, F>(f: F) -> Operation<I, O, E>
where
    F: Fn(I) -> BoxFuture<'static, Result<O, E>> + Send + Sync + 'static,
{
    Arc::new(f)
}

fn boxed_success<I, O, E, F>(f: F) -> SuccessHook<I, O, E>
where
    F: Fn(&O, &I) -> BoxFuture<'static, Result<(), E>> + Send + Sync + 'static,
{
    Arc::new(f)
}

fn boxed_settled<I, O, E, F>(f: F) -> SettledHook<I, O, E>
where
    F: Fn(Settled<'_, O, E>, &I) -> BoxFuture<'static, Result<(), BoxError>>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

impl<I, O, E> fmt::Debug for MutationDescriptor<I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationDescriptor")
            .field("key", &self.key)
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_settled", &self.on_settled.is_some())
            .finish_non_exhaustive()
    }
}

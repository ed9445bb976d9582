//! Invocable mutation handles.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::Instrument;

use super::MutationKey;
use super::descriptor::{MutationDescriptor, Settled};

/// Binds a descriptor into an invocable handle. Performs no I/O.
#[must_use]
pub fn create_mutation<I, O, E>(descriptor: MutationDescriptor<I, O, E>) -> MutationHandle<I, O, E> {
    MutationHandle {
        inner: Arc::new(descriptor),
        in_flight: Arc::new(AtomicUsize::new(0)),
    }
}

/// A reusable, cloneable handle for running one kind of mutation.
///
/// Clones share the same descriptor and in-flight counter.
pub struct MutationHandle<I, O, E> {
    inner: Arc<MutationDescriptor<I, O, E>>,
    in_flight: Arc<AtomicUsize>,
}

impl<I, O, E> MutationHandle<I, O, E>
where
    I: Clone + Send + Sync + 'static,
    O: Send + Sync + 'static,
    E: fmt::Display + Send + Sync + 'static,
{
    /// Runs the mutation with `input`.
    ///
    /// On success the result is returned once `on_success` has completed.
    /// On failure `on_error` observes the error, which is then returned
    /// unchanged. `on_settled` runs last in both cases.
    ///
    /// There is no cancellation: dropping the returned future stops this
    /// layer from reacting but cannot abort a backend call already sent.
    ///
    /// # Errors
    ///
    /// Returns the operation's error, or the error of `on_success`.
    pub async fn run(&self, input: I) -> Result<O, E> {
        let span = tracing::debug_span!("mutation", key = %self.inner.key);
        self.execute(input).instrument(span).await
    }

    async fn execute(&self, input: I) -> Result<O, E> {
        let _in_flight = InFlightGuard::enter(&self.in_flight);
        let descriptor = &self.inner;

        let mut result = (descriptor.operation)(input.clone()).await;
        if let Some(hook) = &descriptor.on_success {
            let hooked = match &result {
                Ok(output) => hook(output, &input).await,
                Err(_) => Ok(()),
            };
            if let Err(err) = hooked {
                result = Err(err);
            }
        }

        match &result {
            Ok(_) => tracing::debug!("mutation succeeded"),
            Err(err) => {
                tracing::debug!(error = %err, "mutation failed");
                if let Some(hook) = &descriptor.on_error {
                    hook(err, &input);
                }
            }
        }

        if let Some(hook) = &descriptor.on_settled {
            let settled = match &result {
                Ok(output) => Settled::Success(output),
                Err(err) => Settled::Failure(err),
            };
            if let Err(err) = hook(settled, &input).await {
                tracing::warn!(key = %descriptor.key, error = %err, "on_settled hook failed");
            }
        }

        result
    }
}

impl<I, O, E> MutationHandle<I, O, E> {
    /// Returns the mutation key.
    #[must_use]
    pub fn key(&self) -> &MutationKey {
        &self.inner.key
    }

    /// Returns how many runs of this handle (and its clones) are in progress.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Returns true while at least one run is in progress.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight() > 0
    }
}

impl<I, O, E> Clone for MutationHandle<I, O, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

impl<I, O, E> fmt::Debug for MutationHandle<I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationHandle")
            .field("key", &self.inner.key)
            .field("in_flight", &self.in_flight())
            .finish()
    }
}

/// Counts a run as in flight until dropped, including when the run's future
/// is dropped early.
struct InFlightGuard<'a>(&'a AtomicUsize);

impl<'a> InFlightGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(counter)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use crate::BoxError;
    use super::*;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tokio::sync::{Barrier, oneshot};

    type Log = Arc<Mutex<Vec<String>>>;

    fn recording(log: &Log, fail: bool) -> MutationDescriptor<u32, u32, String> {
        let (l1, l2, l3, l4) = (log.clone(), log.clone(), log.clone(), log.clone());
        MutationDescriptor::new("double", move |n: u32| {
            l1.lock().push(format!("operation {n}"));
            async move {
                if fail {
                    Err(format!("cannot double {n}"))
                } else {
                    Ok(n * 2)
                }
            }
        })
        .on_success(move |out: &u32, input: &u32| {
            l2.lock().push(format!("success {input} -> {out}"));
            async { Ok(()) }
        })
        .on_error(move |err: &String, _input: &u32| {
            l3.lock().push(format!("error {err}"));
        })
        .on_settled(move |settled, _input| {
            l4.lock().push(format!("settled {}", settled.is_success()));
            async { Ok(()) }
        })
    }

    #[tokio::test]
    async fn test_success_hooks_fire_in_order() {
        let log = Log::default();
        let handle = create_mutation(recording(&log, false));

        assert_eq!(handle.run(21).await, Ok(42));
        assert_eq!(
            *log.lock(),
            vec!["operation 21", "success 21 -> 42", "settled true"]
        );
    }

    #[tokio::test]
    async fn test_failure_propagates_after_hooks() {
        let log = Log::default();
        let handle = create_mutation(recording(&log, true));

        assert_eq!(handle.run(3).await, Err("cannot double 3".to_string()));
        assert_eq!(
            *log.lock(),
            vec!["operation 3", "error cannot double 3", "settled false"]
        );
    }

    #[tokio::test]
    async fn test_success_hook_error_fails_the_run() {
        let log = Log::default();
        let l = log.clone();
        let handle = create_mutation(
            MutationDescriptor::new("navigate", |n: u32| async move { Ok::<_, String>(n) })
                .on_success(|_: &u32, _: &u32| async { Err("route gone".to_string()) })
                .on_error(move |err: &String, _: &u32| l.lock().push(err.clone())),
        );

        assert_eq!(handle.run(1).await, Err("route gone".to_string()));
        assert_eq!(*log.lock(), vec!["route gone"]);
    }

    #[tokio::test]
    async fn test_settled_failure_does_not_mask_outcome() {
        let handle = create_mutation(
            MutationDescriptor::new("noop", |n: u32| async move { Ok::<_, String>(n) })
                .on_settled(|_, _| async { Err::<(), BoxError>("telemetry down".into()) }),
        );
        assert_eq!(handle.run(5).await, Ok(5));

        let failing = create_mutation(
            MutationDescriptor::new("noop", |_: u32| async { Err::<u32, _>("boom".to_string()) })
                .on_settled(|_, _| async { Err::<(), BoxError>("telemetry down".into()) }),
        );
        assert_eq!(failing.run(5).await, Err("boom".to_string()));
    }

    #[tokio::test]
    async fn test_reentrant_runs_proceed_concurrently() {
        let barrier = Arc::new(Barrier::new(2));
        let handle = create_mutation(MutationDescriptor::new("wait", move |n: u32| {
            let barrier = barrier.clone();
            async move {
                barrier.wait().await;
                Ok::<_, String>(n)
            }
        }));

        let (a, b) = tokio::time::timeout(
            Duration::from_secs(5),
            async { tokio::join!(handle.run(1), handle.run(2)) },
        )
        .await
        .expect("runs must not serialize");
        assert_eq!((a, b), (Ok(1), Ok(2)));
        assert_eq!(handle.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_in_flight_tracks_running_invocations() {
        let (tx, rx) = oneshot::channel::<()>();
        let rx = Arc::new(Mutex::new(Some(rx)));
        let handle = create_mutation(MutationDescriptor::new("slow", move |n: u32| {
            let rx = rx.lock().take();
            async move {
                if let Some(rx) = rx {
                    rx.await.map_err(|e| e.to_string())?;
                }
                Ok::<_, String>(n)
            }
        }));

        let running = tokio::spawn({
            let handle = handle.clone();
            async move { handle.run(7).await }
        });
        while !handle.is_pending() {
            tokio::task::yield_now().await;
        }
        assert_eq!(handle.in_flight(), 1);

        tx.send(()).unwrap();
        assert_eq!(running.await.unwrap(), Ok(7));
        assert_eq!(handle.in_flight(), 0);
    }

    #[test]
    fn test_create_performs_no_work() {
        let log = Log::default();
        let handle = create_mutation(recording(&log, false));
        assert_eq!(handle.key().to_string(), "double");
        assert!(log.lock().is_empty());
    }
}

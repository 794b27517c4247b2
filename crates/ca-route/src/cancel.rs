//! Cooperative cancellation for long-running distance computations.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A shared flag the caller can raise to stop a computation.
///
/// The engine checks it before dispatching each source: already-running
/// searches finish, not-yet-dispatched ones are never started, and the
/// whole call returns [`crate::RouteError::Cancelled`] — a partial matrix
/// is never observable.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.  Idempotent; safe from any thread.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

//! Suspension port (interface).

use std::time::Duration;

/// Port for cooperative delays.
///
/// Implementations yield to the runtime instead of blocking the thread.
pub trait Sleeper: Send + Sync {
    /// Suspend the calling task for `duration`.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

//! Tokio timer sleeper.

use std::time::Duration;

use crate::ports::Sleeper;

/// Sleeps on the tokio timer, yielding the task while waiting.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

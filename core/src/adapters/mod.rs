//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in `ports`.
//! Each adapter talks to the operating system directly.

mod probe;
mod sleeper;
mod spawner;

// Re-export main types for convenience
pub use probe::{TcpProbe, DEFAULT_PROBE_TIMEOUT};
pub use sleeper::TokioSleeper;
pub use spawner::{ChildOutput, CommandSpawner, WebUiProcess};

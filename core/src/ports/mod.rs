//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the interfaces that the application layer uses
//! to interact with the operating system. Implementations live in `adapters`.

mod probe;
mod sleeper;
mod spawner;

pub use probe::PortProbe;
pub use sleeper::Sleeper;
pub use spawner::ProcessSpawner;

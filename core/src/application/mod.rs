//! Application layer - Use case services.
//!
//! Services are thin orchestrators that:
//! - Accept domain types as inputs
//! - Use ports (traits) for external dependencies
//! - Return domain types as outputs

mod launcher;
mod port_finder;

pub use launcher::{Launcher, SystemLauncher};
pub use port_finder::PortFinder;

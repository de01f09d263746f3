//! Domain layer - Pure data models.
//!
//! This module contains the values passed between the application services.
//! These types have no I/O dependencies and can be tested in isolation.

mod candidates;
mod launch;

// Re-export all domain types
pub use candidates::{web_url, Candidates};
pub use launch::{LaunchCommand, LaunchOptions, LaunchReport};

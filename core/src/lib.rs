//! PortLaunch Core Library
//!
//! Finds a free local TCP port and starts a web UI process bound to it.
//! Provides functionality to:
//! - Probe `127.0.0.1` ports for listeners
//! - Scan upward from a start port for the first free one
//! - Spawn the web UI with the chosen port as its final argument
//! - Load launcher settings from `~/.portlaunch/config.json`
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure data models
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: Operating system implementations
//! - `application`: Use case services

// Hexagonal architecture layers
pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub mod config;
pub mod error;

// Re-export domain types (primary API)
pub use domain::{LaunchCommand, LaunchOptions, LaunchReport};

// Re-export other commonly used types
pub use adapters::{ChildOutput, CommandSpawner, TcpProbe, TokioSleeper, WebUiProcess};
pub use application::{Launcher, PortFinder, SystemLauncher};
pub use config::{ConfigStore, LauncherConfig};
pub use error::{Error, Result};
pub use ports::{PortProbe, ProcessSpawner, Sleeper};

//! Process spawner port (interface).

use crate::domain::LaunchCommand;
use crate::error::Result;

/// Port for starting the web UI process.
///
/// `spawn` must return as soon as the process has been started; it never
/// waits for the process to exit.
pub trait ProcessSpawner: Send + Sync {
    /// Handle to the running process.
    type Handle: Send;

    /// Start `command` in the background.
    fn spawn(&self, command: &LaunchCommand) -> Result<Self::Handle>;
}

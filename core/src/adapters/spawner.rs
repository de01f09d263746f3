//! Background process spawner backed by `tokio::process`.

use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, Command};
use tracing::debug;

use crate::domain::LaunchCommand;
use crate::error::{Error, Result};
use crate::ports::ProcessSpawner;

/// Where the child's stdout goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChildOutput {
    /// Share the caller's stdout.
    #[default]
    Inherit,
    /// Write to the caller's stderr, keeping stdout free for our own output.
    Stderr,
    /// Discard it.
    Null,
}

impl ChildOutput {
    fn stdio(self) -> Stdio {
        match self {
            ChildOutput::Inherit => Stdio::inherit(),
            ChildOutput::Stderr => Stdio::from(std::io::stderr()),
            ChildOutput::Null => Stdio::null(),
        }
    }
}

/// Starts the web UI as a child process. Stderr is inherited; stdout
/// follows the configured [`ChildOutput`].
///
/// The child is not killed when its handle is dropped, so it keeps
/// running after the caller returns.
#[derive(Debug, Default, Clone)]
pub struct CommandSpawner {
    stdout: ChildOutput,
}

impl CommandSpawner {
    /// Create a new spawner that shares the caller's stdout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route the child's stdout to `stdout`.
    pub fn with_stdout(mut self, stdout: ChildOutput) -> Self {
        self.stdout = stdout;
        self
    }

    /// Current stdout routing.
    pub fn stdout(&self) -> ChildOutput {
        self.stdout
    }
}

impl ProcessSpawner for CommandSpawner {
    type Handle = WebUiProcess;

    fn spawn(&self, command: &LaunchCommand) -> Result<WebUiProcess> {
        debug!(command = %command, stdout = ?self.stdout, "Spawning web UI process");

        let child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(self.stdout.stdio())
            .stderr(Stdio::inherit())
            .kill_on_drop(false)
            .spawn()
            .map_err(|source| Error::Spawn {
                program: command.program.clone(),
                source,
            })?;

        debug!(pid = ?child.id(), "Web UI process started");
        Ok(WebUiProcess { child })
    }
}

/// Handle to a running web UI process.
#[derive(Debug)]
pub struct WebUiProcess {
    child: Child,
}

impl WebUiProcess {
    /// OS process id, if the process has not been reaped yet.
    pub fn pid(&self) -> Option<u32> {
        self.child.id()
    }

    /// Wait for the process to exit.
    pub async fn wait(&mut self) -> Result<ExitStatus> {
        Ok(self.child.wait().await?)
    }
}

//! Web UI launch service.

use tracing::{debug, info};

use crate::adapters::{ChildOutput, CommandSpawner, TcpProbe, TokioSleeper};
use crate::config::LauncherConfig;
use crate::domain::{web_url, LaunchCommand, LaunchOptions, LaunchReport};
use crate::error::{Error, Result};
use crate::ports::{PortProbe, ProcessSpawner, Sleeper};

use super::PortFinder;

/// Launcher wired to the real network, process table and timer.
pub type SystemLauncher = Launcher<TcpProbe, CommandSpawner, TokioSleeper>;

/// Application service that starts the web UI on a resolved port.
///
/// Port resolution, spawning and the post-spawn pause each go through an
/// injected port, so the whole flow runs without sockets or processes
/// in tests.
pub struct Launcher<P: PortProbe, S: ProcessSpawner, Z: Sleeper> {
    config: LauncherConfig,
    finder: PortFinder<P>,
    spawner: S,
    sleeper: Z,
}

impl SystemLauncher {
    /// Create a launcher using TCP probes, `tokio::process` and the tokio timer.
    ///
    /// `stdout` decides where the web UI's own stdout goes.
    pub fn system(config: LauncherConfig, stdout: ChildOutput) -> Result<Self> {
        let probe = TcpProbe::with_timeout(config.probe_timeout());
        let spawner = CommandSpawner::new().with_stdout(stdout);
        Launcher::new(config, probe, spawner, TokioSleeper)
    }
}

impl<P: PortProbe, S: ProcessSpawner, Z: Sleeper> Launcher<P, S, Z> {
    /// Create a launcher from its parts.
    ///
    /// Fails if `config` is not usable for a launch.
    pub fn new(config: LauncherConfig, probe: P, spawner: S, sleeper: Z) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            finder: PortFinder::new(probe),
            spawner,
            sleeper,
        })
    }

    /// Pick the port for a launch.
    ///
    /// An explicit port is used as is, without probing. Otherwise the
    /// scan starts at the configured default port.
    pub fn resolve_port(&self, options: LaunchOptions) -> Result<u16> {
        match options.port {
            Some(port) => {
                debug!(port = port, "Using requested port");
                Ok(port)
            }
            None => self
                .finder
                .find_available_port(self.config.default_port, self.config.max_attempts),
        }
    }

    /// Start the web UI and report where it can be reached.
    ///
    /// The process is spawned in the background; this returns after the
    /// configured startup delay without waiting for it to exit.
    pub async fn launch(&self, options: LaunchOptions) -> Result<LaunchReport<S::Handle>> {
        let port = self.resolve_port(options)?;

        let command = LaunchCommand::from_template(&self.config.command, port)
            .ok_or_else(|| Error::Config("command must name a program".to_string()))?;

        info!(port = port, command = %command, "Launching web UI");
        let handle = self.spawner.spawn(&command)?;

        self.sleeper.sleep(self.config.startup_delay()).await;

        let url = web_url(&self.config.host, port);
        debug!(url = %url, "Web UI started");

        Ok(LaunchReport { port, url, handle })
    }
}

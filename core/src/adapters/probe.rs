//! TCP connect probe.

use std::net::{Ipv4Addr, SocketAddr, TcpStream};
use std::time::Duration;

use tracing::debug;

use crate::ports::PortProbe;

/// Default connect timeout for a single probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// Probes ports by opening a TCP connection to `127.0.0.1`.
///
/// A successful connection means the port is taken. Any failure
/// (refused, timed out, unreachable) is treated as free.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    timeout: Duration,
}

impl TcpProbe {
    /// Create a probe with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_PROBE_TIMEOUT)
    }

    /// Create a probe with a custom connect timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// The connect timeout in use.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for TcpProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl PortProbe for TcpProbe {
    fn is_listening(&self, port: u16) -> bool {
        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));

        // The stream is dropped (and closed) at the end of each arm.
        match TcpStream::connect_timeout(&addr, self.timeout) {
            Ok(_stream) => {
                debug!(port = port, "Port has a listener");
                true
            }
            Err(e) => {
                debug!(port = port, error = %e, "Port is free");
                false
            }
        }
    }
}

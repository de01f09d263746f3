//! Free port discovery service.

use tracing::{debug, warn};

use crate::domain::Candidates;
use crate::error::{Error, Result};
use crate::ports::PortProbe;

/// Application service that finds the first free local port.
///
/// Candidates are probed one at a time in ascending order; the first
/// one without a listener wins.
pub struct PortFinder<P: PortProbe> {
    probe: P,
}

impl<P: PortProbe> PortFinder<P> {
    /// Create a new finder with the given probe.
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Find the first port in `start..start + max_attempts` with no listener.
    ///
    /// Fails with [`Error::NoAvailablePort`] once every candidate has been
    /// probed and found occupied. The scan never wraps past 65535, so near
    /// the top of the range fewer than `max_attempts` ports are tried; the
    /// error reports the ports actually tried.
    pub fn find_available_port(&self, start: u16, max_attempts: u32) -> Result<u16> {
        if max_attempts == 0 {
            return Err(Error::Config("max attempts must be at least 1".to_string()));
        }

        let mut end = start;
        let mut attempts = 0;
        for port in Candidates::new(start, max_attempts) {
            end = port;
            attempts += 1;
            if !self.probe.is_listening(port) {
                debug!(port = port, "Found available port");
                return Ok(port);
            }
            debug!(port = port, "Port in use, trying next");
        }

        warn!(
            start = start,
            end = end,
            attempts = attempts,
            "No available port in range"
        );
        Err(Error::NoAvailablePort {
            start,
            end,
            attempts,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::VecDeque;

    /// Probe that replays scripted answers and records every port it saw.
    pub(crate) struct ScriptedProbe {
        answers: Mutex<VecDeque<bool>>,
        fallback: bool,
        probed: Mutex<Vec<u16>>,
    }

    impl ScriptedProbe {
        /// Answers `listening` for every port.
        pub(crate) fn always(listening: bool) -> Self {
            Self::script(&[], listening)
        }

        /// Answers from `answers` in order, then `fallback`.
        pub(crate) fn script(answers: &[bool], fallback: bool) -> Self {
            Self {
                answers: Mutex::new(answers.iter().copied().collect()),
                fallback,
                probed: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn probed(&self) -> Vec<u16> {
            self.probed.lock().clone()
        }
    }

    impl PortProbe for ScriptedProbe {
        fn is_listening(&self, port: u16) -> bool {
            self.probed.lock().push(port);
            self.answers.lock().pop_front().unwrap_or(self.fallback)
        }
    }

    #[test]
    fn test_start_port_free() {
        let probe = ScriptedProbe::always(false);
        let finder = PortFinder::new(&probe);

        assert_eq!(finder.find_available_port(8080, 10).unwrap(), 8080);
        assert_eq!(probe.probed(), vec![8080]);
    }

    #[test]
    fn test_start_port_taken() {
        let probe = ScriptedProbe::script(&[true, false], false);
        let finder = PortFinder::new(&probe);

        assert_eq!(finder.find_available_port(8080, 10).unwrap(), 8081);
        assert_eq!(probe.probed(), vec![8080, 8081]);
    }

    #[test]
    fn test_exhausted() {
        let probe = ScriptedProbe::always(true);
        let finder = PortFinder::new(&probe);

        let err = finder.find_available_port(8080, 5).unwrap_err();
        assert!(matches!(
            err,
            Error::NoAvailablePort {
                start: 8080,
                end: 8084,
                attempts: 5
            }
        ));
        assert_eq!(probe.probed(), vec![8080, 8081, 8082, 8083, 8084]);
    }

    #[test]
    fn test_stops_at_max_port() {
        let probe = ScriptedProbe::always(true);
        let finder = PortFinder::new(&probe);

        let err = finder.find_available_port(65534, 5).unwrap_err();
        assert!(matches!(
            err,
            Error::NoAvailablePort {
                start: 65534,
                end: 65535,
                attempts: 2
            }
        ));
        assert_eq!(probe.probed(), vec![65534, 65535]);
    }

    #[test]
    fn test_exhaustion_reports_ports_tried() {
        let probe = ScriptedProbe::always(true);
        let finder = PortFinder::new(&probe);

        let err = finder.find_available_port(65535, 10).unwrap_err();
        assert_eq!(probe.probed(), vec![65535]);
        assert_eq!(
            err.to_string(),
            "No available port in 65535-65535 (1 attempts)"
        );
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let probe = ScriptedProbe::always(false);
        let finder = PortFinder::new(&probe);

        let err = finder.find_available_port(8080, 0).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(probe.probed().is_empty());
    }

    #[test]
    fn test_with_real_listener() {
        use crate::adapters::TcpProbe;
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let taken = listener.local_addr().unwrap().port();

        let finder = PortFinder::new(TcpProbe::new());
        let found = finder.find_available_port(taken, 1);
        assert!(found.unwrap_err().is_exhausted());
    }
}

//! Find-port command - print the first free port.

use std::io::Write;

use anyhow::Result;
use portlaunch_core::{LauncherConfig, PortFinder, PortProbe, TcpProbe};

pub fn run(
    config: &LauncherConfig,
    start: Option<u16>,
    max_attempts: Option<u32>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let finder = PortFinder::new(TcpProbe::with_timeout(config.probe_timeout()));
    let port = find(&finder, config, start, max_attempts)?;
    write_port(out, port, json)
}

/// Scan with command-line overrides falling back to the configuration.
fn find<P: PortProbe>(
    finder: &PortFinder<P>,
    config: &LauncherConfig,
    start: Option<u16>,
    max_attempts: Option<u32>,
) -> Result<u16> {
    let start = start.unwrap_or(config.default_port);
    let max_attempts = max_attempts.unwrap_or(config.max_attempts);
    Ok(finder.find_available_port(start, max_attempts)?)
}

fn write_port(out: &mut impl Write, port: u16, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::json!({ "port": port }))?;
    } else {
        writeln!(out, "{}", port)?;
    }
    Ok(())
}

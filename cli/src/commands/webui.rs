//! Webui command - start the web interface on a free port.

use std::io::Write;

use anyhow::{bail, Result};
use portlaunch_core::{ChildOutput, LaunchOptions, LauncherConfig, SystemLauncher};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct LaunchOutput<'a> {
    port: u16,
    url: &'a str,
    pid: Option<u32>,
}

pub async fn run(
    config: LauncherConfig,
    port: Option<u16>,
    wait: bool,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    // Keep stdout for the JSON report alone
    let child_stdout = if json {
        ChildOutput::Stderr
    } else {
        ChildOutput::Inherit
    };

    let launcher = SystemLauncher::system(config, child_stdout)?;
    let mut report = launcher.launch(LaunchOptions { port }).await?;

    let output = LaunchOutput {
        port: report.port,
        url: &report.url,
        pid: report.handle.pid(),
    };
    write_report(out, &output, json)?;

    if wait {
        let status = report.handle.wait().await?;
        info!(status = %status, "Web UI exited");
        if !status.success() {
            bail!("Web UI exited with {}", status);
        }
    }

    Ok(())
}

fn write_report(out: &mut impl Write, output: &LaunchOutput<'_>, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(output)?)?;
    } else {
        writeln!(out, "Web UI available at {}", output.url)?;
    }
    out.flush()?;
    Ok(())
}

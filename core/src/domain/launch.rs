//! Launch request and result models.

use std::fmt;

/// Options supplied by the caller for a single launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Explicit port to use. `None` selects the first free port.
    pub port: Option<u16>,
}

impl LaunchOptions {
    /// Options that auto-select the port.
    pub fn auto() -> Self {
        Self { port: None }
    }

    /// Options that pin the port.
    pub fn with_port(port: u16) -> Self {
        Self { port: Some(port) }
    }
}

/// A fully resolved command line for the web UI process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    /// Executable name or path.
    pub program: String,
    /// Arguments, the last of which is always the port.
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// Build a command from a template (`program` followed by leading
    /// arguments) and the resolved port.
    ///
    /// Returns `None` if the template is empty.
    pub fn from_template(template: &[String], port: u16) -> Option<Self> {
        let (program, rest) = template.split_first()?;
        let mut args = rest.to_vec();
        args.push(port.to_string());
        Some(Self {
            program: program.clone(),
            args,
        })
    }

    /// The final argument (the rendered port).
    pub fn last_arg(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Outcome of a successful launch.
#[derive(Debug)]
pub struct LaunchReport<H> {
    /// Port the web UI was told to bind.
    pub port: u16,
    /// URL the web UI should be reachable at.
    pub url: String,
    /// Handle to the spawned process.
    pub handle: H,
}

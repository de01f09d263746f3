//! Config command - show or initialise the launcher configuration.

use std::io::Write;

use anyhow::{bail, Result};
use portlaunch_core::{ConfigStore, LauncherConfig};

pub fn show(
    store: &ConfigStore,
    config: &LauncherConfig,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
        return Ok(());
    }

    writeln!(out, "Config file:     {}", store.path().display())?;
    writeln!(out, "Default port:    {}", config.default_port)?;
    writeln!(out, "Max attempts:    {}", config.max_attempts)?;
    writeln!(out, "Host:            {}", config.host)?;
    writeln!(out, "Command:         {} <port>", config.command.join(" "))?;
    writeln!(out, "Startup delay:   {}ms", config.startup_delay_ms)?;
    writeln!(out, "Probe timeout:   {}ms", config.probe_timeout_ms)?;
    Ok(())
}

pub async fn init(store: &ConfigStore, force: bool, out: &mut impl Write) -> Result<()> {
    if store.path().exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            store.path().display()
        );
    }

    store.save(&LauncherConfig::default()).await?;
    writeln!(out, "Wrote default configuration to {}", store.path().display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_init_writes_defaults() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::with_path(dir.path().join("config.json"));

        let mut out = Vec::new();
        init(&store, false, &mut out).await.unwrap();

        assert!(String::from_utf8(out).unwrap().starts_with("Wrote default configuration"));
        assert_eq!(store.load().await.unwrap(), LauncherConfig::default());
    }

    #[tokio::test]
    async fn test_init_keeps_existing_without_force() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::with_path(dir.path().join("config.json"));
        std::fs::write(store.path(), r#"{"defaultPort": 3000}"#).unwrap();

        let mut out = Vec::new();
        let err = init(&store, false, &mut out).await.unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(store.load().await.unwrap().default_port, 3000);

        init(&store, true, &mut out).await.unwrap();
        assert_eq!(store.load().await.unwrap().default_port, 8080);
    }

    #[test]
    fn test_show_human() {
        let store = ConfigStore::with_path("/tmp/portlaunch.json".into());
        let mut out = Vec::new();
        show(&store, &LauncherConfig::default(), false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Config file:     /tmp/portlaunch.json"));
        assert!(text.contains("Default port:    8080"));
        assert!(text.contains("Command:         streamlit run webui.py --server.port <port>"));
    }

    #[test]
    fn test_show_json() {
        let store = ConfigStore::with_path("/tmp/portlaunch.json".into());
        let mut out = Vec::new();
        show(&store, &LauncherConfig::default(), true, &mut out).unwrap();

        let parsed: LauncherConfig = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, LauncherConfig::default());
    }
}

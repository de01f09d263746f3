//! Example: Find the first free port from 8080 and show the launch command.

use portlaunch_core::{LaunchCommand, LauncherConfig, PortFinder, TcpProbe};

fn main() {
    let config = LauncherConfig::default();
    let finder = PortFinder::new(TcpProbe::with_timeout(config.probe_timeout()));

    println!(
        "Scanning {} ports from {}...\n",
        config.max_attempts, config.default_port
    );

    match finder.find_available_port(config.default_port, config.max_attempts) {
        Ok(port) => {
            println!("Free port: {}", port);
            if let Some(command) = LaunchCommand::from_template(&config.command, port) {
                println!("Would run: {}", command);
            }
        }
        Err(e) => {
            eprintln!("Error finding port: {}", e);
        }
    }
}

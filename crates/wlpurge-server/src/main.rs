//! wlpurge Server CLI
//!
//! Starts the HTTP server that receives stored-record events and purges
//! matching worklist files.

use std::env;
use std::process;
use wlpurge_server::{config::ServerConfig, start_server, ServerError};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        // Load from specified config file
        let config_path = &args[2];
        ServerConfig::from_file(config_path)?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        // Use default test configuration
        eprintln!("Warning: No config file specified, using default test configuration");
        eprintln!("Usage: wlpurge-server --config <path-to-config.toml>");
        eprintln!();
        ServerConfig::default_test_config()
    };

    // Start the server
    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("wlpurge Server - Worklist Purge Service");
    println!();
    println!("USAGE:");
    println!("    wlpurge-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("EXAMPLE:");
    println!("    wlpurge-server --config config/wlpurge.toml");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file should contain:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 8042)");
    println!("    - [purger] section:");
    println!("      - enabled: whether purging starts enabled (default: false)");
    println!("      - worklist_dir: directory holding pending worklist files");
    println!("      - worklist_extension: file extension to match (default: 'wl')");
    println!("      - cache_dir: directory for daily dedup cache files");
    println!("      - cache_prefix: cache file name prefix");
    println!();
}

//! Gradebook Console
//!
//! Interactive, menu-driven front-end with login.

use std::io;

use clap::Parser;
use gradebook::accounts::AccountStore;
use gradebook::console::Console;
use gradebook::{Config, Registry};
use tracing_subscriber::{fmt, EnvFilter};

/// Gradebook interactive console
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "Academic exam result management console")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./gradebook_data")]
    data_dir: String,

    /// Do not write the records file after every insert/delete
    #[arg(long)]
    no_autosave: bool,
}

fn main() {
    // Logs go to stderr so they never interleave with the menus on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Gradebook Console v{}", gradebook::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .autosave(!args.no_autosave)
        .build();

    let registry = match Registry::open(config.clone()) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to open registry: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut accounts = match AccountStore::open(&config.accounts_path()) {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Failed to open account store: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if accounts.is_empty() {
        println!("No accounts yet. Choose Register to create one.");
    }

    let stdin = io::stdin();
    let mut console = Console::new(&registry, &mut accounts, stdin.lock(), io::stdout());
    if let Err(e) = console.run() {
        tracing::error!("Console error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

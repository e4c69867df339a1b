//! Command-line front end for the trie router.
//!
//! ```text
//! trie-router --config routes.toml resolve /home/about /missing
//! trie-router --config routes.toml routes
//! trie-router --config routes.toml check
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use trie_router::config::{load_config, RouterConfig};
use trie_router::observability::init_logging;

#[derive(Parser)]
#[command(name = "trie-router")]
#[command(about = "Resolve paths against a trie-backed route table", long_about = None)]
struct Cli {
    /// Route table (TOML). Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one or more paths
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the route table as JSON
    Routes,
    /// Validate the route table
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    init_logging(&config.observability);

    let dispatcher = config.build_dispatcher();

    match cli.command {
        Commands::Resolve { paths } => {
            for path in &paths {
                println!("{} -> {}", path, dispatcher.resolve(path));
            }
        }
        Commands::Routes => {
            let routes: Vec<_> = dispatcher
                .routes()
                .into_iter()
                .map(|(path, handler)| json!({ "path": path, "handler": handler }))
                .collect();
            let table = json!({
                "root_handler": dispatcher.root_handler(),
                "not_found_handler": dispatcher.not_found_handler(),
                "routes": routes,
            });
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        Commands::Check => {
            println!(
                "ok: {} route(s), {} distinct path(s)",
                config.routes.len(),
                dispatcher.len()
            );
        }
    }

    Ok(())
}

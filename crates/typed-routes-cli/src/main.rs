mod commands;
mod project;
mod watcher;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "typed-routes")]
#[command(version, about = "Typed route declarations for file-based routers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the router directory once and write router.d.ts
    Generate(ProjectArgs),

    /// Generate, then keep router.d.ts in sync with the router directory
    Watch(ProjectArgs),
}

/// Project location; flags override typed-routes.toml
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root containing typed-routes.toml
    #[arg(short, long, default_value = ".")]
    pub project_root: PathBuf,

    /// Router directory, relative to the project root
    #[arg(short, long)]
    pub router_dir: Option<PathBuf>,

    /// Output directory for router.d.ts, relative to the project root
    #[arg(short, long)]
    pub types_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Generate(args) => commands::generate::execute(&args)?,
        Commands::Watch(args) => commands::watch::execute(&args)?,
    }

    Ok(())
}

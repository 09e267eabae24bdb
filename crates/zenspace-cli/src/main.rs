mod commands;
mod script;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "zenspace", about = "Room photo masking and before/after comparison")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show photo dimensions, format and brush size
    Info(commands::info::InfoArgs),
    /// Replay scripted paint gestures over a photo and export the masked image
    Mask(commands::mask::MaskArgs),
    /// Render a before/after split comparison
    Compare(commands::compare::CompareArgs),
    /// Build image-generation requests as JSON
    Request(commands::request::RequestArgs),
    /// Print the default editor config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Mask(args) => commands::mask::run(args),
        Commands::Compare(args) => commands::compare::run(args),
        Commands::Request(args) => commands::request::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}

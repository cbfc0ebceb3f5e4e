mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ndvi", about = "NDVI heatmap renderer and viewport explorer")]
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
    /// Show grid dimensions, value range and health distribution
    Info(commands::info::InfoArgs),
    /// Render a grid to PNG, optionally zoomed
    Render(commands::render::RenderArgs),
    /// Replay a scripted pointer session against a grid
    Replay(commands::replay::ReplayArgs),
    /// Generate a synthetic field grid
    Synth(commands::synth::SynthArgs),
    /// Print or save the default engine config as TOML
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
        Commands::Render(args) => commands::render::run(args),
        Commands::Replay(args) => commands::replay::run(args),
        Commands::Synth(args) => commands::synth::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}

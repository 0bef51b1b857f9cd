mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "astrostack", about = "Deep-sky frame alignment and stacking")]
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
    /// Align and stack a sequence of frames
    Stack(commands::stack::StackArgs),
    /// Element-wise median across identically-sized frames
    PixelMedian(commands::pixel_median::PixelMedianArgs),
    /// Print the default extractor/aligner configuration as TOML
    Config,
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
        Commands::Stack(args) => commands::stack::run(args),
        Commands::PixelMedian(args) => commands::pixel_median::run(args),
        Commands::Config => commands::config::run(),
    }
}

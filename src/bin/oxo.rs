//! oxo CLI - unbeatable tic-tac-toe in the terminal
//!
//! This binary is the external driver around the game core: it owns the
//! input loop and rendering, and talks to the library only through the
//! board snapshot, the phase marker, and the turn-processing entry points.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Unbeatable tic-tac-toe against a minimax engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine (you are X and move first)
    Play,

    /// Analyze a position and show the engine's reply
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Watch the engine play both sides to the forced draw
    Selfplay,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play => oxo::cli::commands::play::execute(),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Selfplay => oxo::cli::commands::selfplay::execute(),
    }
}

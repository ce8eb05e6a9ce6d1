//! HEXBOARD CLI - Command-line interface
//!
//! Commands:
//! - serve: Start the board server
//! - board: List every pip with its flags
//! - neighbors: Show the pips adjacent to one pip
//! - traverse: Breadth-first walk from a pip

mod inspect;
mod server;

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexboard")]
#[command(about = "Hexagonal pip board server and inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the board server
    Serve(server::ServerArgs),
    /// List every pip with position, corner flag and degree
    Board(inspect::BoardArgs),
    /// Show the neighbors of a pip
    Neighbors(inspect::NeighborsArgs),
    /// Walk the board breadth-first from a pip
    Traverse(inspect::TraverseArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => server::run(args),
        Commands::Board(args) => inspect::run_board(args),
        Commands::Neighbors(args) => inspect::run_neighbors(args),
        Commands::Traverse(args) => inspect::run_traverse(args),
    }
}

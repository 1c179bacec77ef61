//! Composition root: argument parsing, logging setup, pattern dispatch
//! and console output. The simulation itself lives in the library.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, debug};

use sparse_life::{Pattern, iterate, presets, rendering};

/// Conway's Game of Life on an unbounded sparse grid.
///
/// Prints the seed pattern and every following generation as a grid of
/// glyphs, one generation per block.
#[derive(Parser, Debug)]
#[command(name = "sparse-life", version, about = "Sparse Game of Life simulator")]
struct Cli {
    /// Seed pattern: rpentomino, glider or square
    #[arg(value_parser = parse_pattern)]
    pattern: Pattern,

    /// Number of generations to simulate
    generations: usize,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn parse_pattern(name: &str) -> Result<Pattern, String> {
    presets::find(name).map_err(|err| {
        let known: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        format!("{err} (expected one of: {})", known.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    debug!(
        pattern = cli.pattern.name,
        generations = cli.generations,
        "starting simulation"
    );

    let history = iterate(cli.pattern.to_state(), cli.generations);
    for state in &history {
        println!("{}", rendering::render(state));
    }

    Ok(())
}

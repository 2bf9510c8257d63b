use std::{path::PathBuf, process::ExitCode, sync::Arc};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crossgen::{
    error::Result,
    puzzle::{Crossword, Slot},
    render,
    solver::{engine::Solver, stats::render_stats_table, Assignment},
};

#[derive(Parser)]
#[command(name = "crossgen", about = "Fill a crossword grid from a word list", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a grid structure and word list, solve, and print the result.
    Generate {
        /// Grid structure file: `_` for fillable cells, anything else blocked.
        structure: PathBuf,
        /// Word list file, one candidate per line.
        words: PathBuf,
        /// Optional path to save the text rendering to.
        output: Option<PathBuf>,
        /// Print solve statistics.
        #[arg(long)]
        stats: bool,
        /// Emit the assignment as JSON instead of a rendered grid.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct SolvedSlot<'a> {
    #[serde(flatten)]
    slot: Slot,
    word: &'a str,
}

fn emit_json(crossword: &Crossword, assignment: &Assignment) -> Result<(), serde_json::Error> {
    // Stable slot order rather than hash order.
    let entries: Vec<SolvedSlot> = crossword
        .slots()
        .iter()
        .map(|slot| SolvedSlot {
            slot: *slot,
            word: assignment[slot].as_str(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn generate(
    structure: &PathBuf,
    words: &PathBuf,
    output: Option<&PathBuf>,
    stats: bool,
    json: bool,
) -> Result<()> {
    let crossword = Arc::new(Crossword::from_files(structure, words)?);
    let solver = Solver::new(crossword.clone());
    let (assignment, search_stats) = solver.solve();

    match assignment {
        // An unsatisfiable puzzle is a normal outcome, not an error exit.
        None => println!("No solution."),
        Some(assignment) => {
            if json {
                emit_json(&crossword, &assignment).expect("assignment serializes");
            } else {
                print!("{}", render::render_text(&crossword, &assignment));
            }
            if let Some(path) = output {
                render::save_text(&crossword, &assignment, path)?;
            }
        }
    }

    if stats {
        println!("{}", render_stats_table(&search_stats));
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Command::Generate {
            structure,
            words,
            output,
            stats,
            json,
        } => generate(structure, words, output.as_ref(), *stats, *json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

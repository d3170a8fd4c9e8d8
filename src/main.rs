use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};

use bislide::puzzle::{load_board, render_path, Board};
use bislide::search::{solve, SearchConfig, SearchStatistics, SolveOutcome, SolveReport};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "bislide")]
#[command(about = "bislide - bidirectional n-puzzle solver")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one puzzle file and print the move sequence
    Solve {
        /// Path to the puzzle file
        file: PathBuf,
        /// Per-worker expansion budget before giving up
        #[arg(long)]
        max_steps: Option<u64>,
        /// Wall-clock bound in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Print search statistics
        #[arg(long, short)]
        verbose: bool,
    },
    /// Solve several puzzle files, reporting each path and its segments
    Batch {
        /// Puzzle files to solve
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Per-worker expansion budget before giving up
        #[arg(long)]
        max_steps: Option<u64>,
        /// Wall-clock bound in seconds, per puzzle
        #[arg(long)]
        timeout: Option<u64>,
    },
}

const EXIT_UNSOLVABLE: i32 = 1;
const EXIT_BAD_INPUT: i32 = 2;

fn build_config(max_steps: Option<u64>, timeout: Option<u64>) -> SearchConfig {
    SearchConfig::default()
        .with_max_steps_option(max_steps)
        .with_timeout_option(timeout.map(Duration::from_secs))
}

/// Run one solve, short-circuiting on the parity check. The search itself
/// never depends on parity; this only skips a doomed exhaustion run.
fn run_solve(board: &Board, config: &SearchConfig) -> SolveReport {
    if !board.is_solvable() {
        return SolveReport {
            outcome: SolveOutcome::Unsolvable,
            statistics: SearchStatistics::default(),
        };
    }
    solve(board, config)
}

fn load_or_exit(path: &Path) -> Board {
    match load_board(path) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            process::exit(EXIT_BAD_INPUT);
        }
    }
}

// --- Main Function ---

fn main() {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Commands::Solve {
            file,
            max_steps,
            timeout,
            verbose,
        } => {
            let config = build_config(max_steps, timeout);
            let board = load_or_exit(&file);
            let report = run_solve(&board, &config);

            match report.outcome {
                SolveOutcome::Solved(solution) => {
                    println!("{}", solution);
                    println!("{} moves", solution.len());
                    if verbose {
                        print!("{}", report.statistics.format_summary());
                    }
                }
                SolveOutcome::Unsolvable => {
                    eprintln!("{}: unsolvable", file.display());
                    process::exit(EXIT_UNSOLVABLE);
                }
            }
        }
        Commands::Batch {
            files,
            max_steps,
            timeout,
        } => {
            let config = build_config(max_steps, timeout);
            let mut bad_input = false;
            let mut unsolvable = false;

            for file in &files {
                let board = match load_board(file) {
                    Ok(board) => board,
                    Err(e) => {
                        eprintln!("{}: {}", file.display(), e);
                        bad_input = true;
                        continue;
                    }
                };

                match run_solve(&board, &config).outcome {
                    SolveOutcome::Solved(solution) => {
                        println!(
                            "{}: {} moves  forward={}  backward={}",
                            file.display(),
                            solution.len(),
                            render_path(&solution.forward),
                            render_path(&solution.backward),
                        );
                    }
                    SolveOutcome::Unsolvable => {
                        println!("{}: unsolvable", file.display());
                        unsolvable = true;
                    }
                }
            }

            if bad_input {
                process::exit(EXIT_BAD_INPUT);
            }
            if unsolvable {
                process::exit(EXIT_UNSOLVABLE);
            }
        }
    }
}

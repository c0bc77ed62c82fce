//! Batch driver for the Gridloom Sudoku solver.
//!
//! Reads a file containing one 81-character puzzle per line ('0' marks an
//! unknown cell), solves each, and prints the resulting grid. Puzzles with
//! no solution print their best-effort partial state; malformed lines are
//! reported and skipped.
//!
//! # Usage
//!
//! ```sh
//! gridloom puzzles.txt
//! gridloom puzzles.txt --stats
//! ```

use std::{fs, path::PathBuf, process, time::Instant};

use clap::Parser;
use gridloom_core::Board;
use gridloom_solver::{SolveStats, solve_line};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// File containing one 81-character puzzle per line.
    #[arg(value_name = "FILE")]
    puzzles: PathBuf,

    /// Print per-technique and guess counts after each puzzle.
    #[arg(long)]
    stats: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let input = match fs::read_to_string(&args.puzzles) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("Cannot read {}: {err}", args.puzzles.display());
            process::exit(2);
        }
    };

    let start = Instant::now();
    let mut solved = 0usize;
    let mut unsolved = 0usize;
    let mut rejected = 0usize;

    for (line_nr, line) in (1..).zip(input.lines()) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let puzzle_start = Instant::now();
        match solve_line(line) {
            Ok(report) if report.solved => {
                solved += 1;
                println!("Puzzle {line_nr} solved in {:.2?}", puzzle_start.elapsed());
                println!("{}", render(&report.board));
                if args.stats {
                    print_stats(&report.stats);
                }
            }
            Ok(report) => {
                unsolved += 1;
                log::warn!("puzzle {line_nr}: no solution found");
                println!("Puzzle {line_nr} has no solution; best effort:");
                println!("{}", render(&report.board));
                if args.stats {
                    print_stats(&report.stats);
                }
            }
            Err(err) => {
                rejected += 1;
                log::warn!("puzzle {line_nr}: {err}");
                println!("Puzzle {line_nr} rejected: {err}");
            }
        }
        println!();
    }

    println!(
        "{solved} solved, {unsolved} unsolved, {rejected} rejected in {:.2?}",
        start.elapsed()
    );
    if unsolved + rejected > 0 {
        process::exit(1);
    }
}

/// Renders a board as a 9×9 block grid with 3×3 separators, `_` marking
/// unknown cells.
fn render(board: &Board) -> String {
    let mut out = String::new();
    for y in 0..9u8 {
        if y != 0 && y % 3 == 0 {
            out.push_str("---+---+---\n");
        }
        for x in 0..9u8 {
            if x != 0 && x % 3 == 0 {
                out.push('|');
            }
            match board.value(y * 9 + x) {
                Some(digit) => out.push(char::from(b'0' + digit.value())),
                None => out.push('_'),
            }
        }
        out.push('\n');
    }
    out.pop();
    out
}

fn print_stats(stats: &SolveStats) {
    let mut counts: Vec<_> = stats.applications.iter().collect();
    counts.sort_unstable();
    for (name, count) in counts {
        println!("  {name}: {count}");
    }
    println!("  guesses: {}", stats.guesses);
    println!("  total steps: {}", stats.total_steps);
}

//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Generate puzzles for a difficulty tier
//! - Reproduce a puzzle from a seed or a memorable phrase
//! - Probe whether a derived puzzle has a unique solution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty tier (easy, medium, hard, expert, master):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty master
//! ```
//!
//! Reproduce a specific board from its 64-character hex seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Derive the seed from a phrase instead:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "daily 2024-06-01"
//! ```
//!
//! Sample several boards and report uniqueness for each:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 5 --check-unique
//! ```

use std::process;

use clap::Parser;
use scoredoku_core::Difficulty;
use scoredoku_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, count_solutions};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier to generate for.
    #[arg(long, value_name = "TIER", default_value = "medium")]
    difficulty: Difficulty,

    /// Reproduce the puzzle for a 64-character hex seed.
    #[arg(long, value_name = "HEX", conflicts_with_all = ["phrase", "count"])]
    seed: Option<String>,

    /// Derive the seed from a phrase.
    #[arg(long, value_name = "PHRASE", conflicts_with = "count")]
    phrase: Option<String>,

    /// Number of random puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Probe each puzzle for solution uniqueness (capped backtracking).
    #[arg(long)]
    check_unique: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::new();

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }

    let seeds: Vec<PuzzleSeed> = if let Some(hex) = &args.seed {
        match hex.parse() {
            Ok(seed) => vec![seed],
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        }
    } else if let Some(phrase) = &args.phrase {
        vec![PuzzleSeed::from_phrase(phrase)]
    } else {
        (0..args.count).map(|_| PuzzleSeed::random()).collect()
    };

    for (i, seed) in seeds.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        let puzzle = generator.generate_with_seed(seed, args.difficulty);
        print_puzzle(&puzzle, args.check_unique);
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle, check_unique: bool) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem ({}, {} givens):", puzzle.difficulty, puzzle.problem.filled_count());
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);

    if check_unique {
        let unique = count_solutions(&puzzle.problem, 2) == 1;
        println!();
        println!("Unique solution: {}", if unique { "yes" } else { "no" });
    }
}

//! Example driving a full session from start to submission.
//!
//! Plays a seeded easy board to completion: one deliberate mistake, one
//! hint, and correct placements for everything else, then submits the
//! outcome to an in-memory leaderboard and prints the standings.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example autoplay
//! ```
//!
//! With generation logging:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example autoplay
//! ```

use scoredoku_core::{Difficulty, Digit, Grid, Position};
use scoredoku_generator::{PuzzleGenerator, PuzzleSeed};
use scoredoku_leaderboard::{
    InMemoryLeaderboard, LeaderboardStore as _, ScoreSubmission, puzzle_fingerprint,
    submit_final_score,
};
use scoredoku_session::{PlaceOutcome, Session};

fn main() {
    env_logger::init();

    let seed = PuzzleSeed::from_phrase("autoplay demo");
    let puzzle = PuzzleGenerator::new().generate_with_seed(seed, Difficulty::Easy);
    let solution = puzzle.solution;
    let mut session = Session::from_puzzle(puzzle);

    println!("Playing an easy board from seed {seed}");

    // One wrong digit first, to show the penalty path.
    let first_hole = first_vacant(&session);
    let right = solution.get(first_hole).expect("solution is complete");
    let wrong = Digit::ALL
        .into_iter()
        .find(|digit| *digit != right)
        .expect("some digit differs");
    session.select(first_hole);
    if let PlaceOutcome::Mistake { deducted, .. } = session.place_digit(wrong) {
        println!("Deliberate mistake at {first_hole}: -{deducted} points");
    }

    // One hint, then correct placements for the rest.
    session.use_hint();
    while !session.is_completed() {
        let pos = first_vacant_or_wrong(&session, &solution);
        if session.selected() != Some(pos) {
            session.select(pos);
        }
        session.place_digit(solution.get(pos).expect("solution is complete"));
    }

    let outcome = session.outcome().expect("session just completed");
    println!(
        "Completed in {} with {} points, {} mistakes, {} hints",
        session.elapsed_display(),
        outcome.score,
        outcome.mistakes,
        outcome.hints_used
    );

    let board: Grid = outcome.puzzle.parse().expect("problem grid round-trips");
    println!("Board fingerprint: {}", puzzle_fingerprint(&board));

    let store = InMemoryLeaderboard::new();
    submit_final_score(
        &store,
        &ScoreSubmission {
            player: "autoplayer".into(),
            score: outcome.score,
            difficulty: outcome.difficulty,
            time_secs: outcome.elapsed_secs,
            mistakes: outcome.mistakes,
            hints_used: outcome.hints_used,
            puzzle: outcome.puzzle,
        },
    );

    println!("Leaderboard:");
    for entry in store.top(10).expect("in-memory store is available") {
        println!(
            "  #{} {} - {} points over {} game(s)",
            entry.rank, entry.player, entry.score, entry.games
        );
    }
}

fn first_vacant(session: &Session) -> Position {
    Position::ALL
        .into_iter()
        .find(|pos| session.cell(*pos).is_vacant())
        .expect("board has vacant cells")
}

/// First cell that is vacant or holds a digit disagreeing with `solution`.
fn first_vacant_or_wrong(session: &Session, solution: &Grid) -> Position {
    Position::ALL
        .into_iter()
        .find(|pos| session.cell(*pos).digit() != solution.get(*pos))
        .expect("an incomplete board has a cell left to fix")
}

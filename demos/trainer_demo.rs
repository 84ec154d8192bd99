//! Deal preflop practice rounds across every level and position.
//!
//! Run with: `cargo run --example trainer_demo`
//!
//! Fixed seeds keep the output deterministic and reproducible:
//!
//! 1. **Seeded rounds** — one round per difficulty level, same seed, showing
//!    how the thresholds loosen while the dealt hand stays identical.
//! 2. **Position focus** — rounds pinned to each of the five trainable
//!    seats, showing how the same kind of hand plays tighter up front.

use holdem_trainer::{
    deal_round, DifficultyLevel, TrainerPosition, TrainerRound, TrainerRoundRequest,
};

fn print_round(round: &TrainerRound, level: DifficultyLevel) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "  Hand: {}{}  Spot: {}  Effective stack: {}bb  Level: {}",
        round.cards[0], round.cards[1], round.spot, round.effective_bb, level
    );
    println!("  Suggested default: {}", round.verdict.action);
    println!("  Why: {}", round.verdict.rationale);
}

fn main() {
    println!("=== Same seed, three levels ===\n");
    for level in DifficultyLevel::ALL {
        let round = deal_round(&TrainerRoundRequest {
            level,
            position_focus: None,
            rng_seed: Some(42),
        });
        print_round(&round, level);
    }

    println!("\n=== Position focus at Intermediate ===\n");
    for position in TrainerPosition::ALL {
        let round = deal_round(&TrainerRoundRequest {
            level: DifficultyLevel::Intermediate,
            position_focus: Some(position),
            rng_seed: Some(7),
        });
        print_round(&round, DifficultyLevel::Intermediate);
    }
}

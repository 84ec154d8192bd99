//! Seeded random generation of trainer rounds.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::game_flow::models::{Card, Rank, Suit};
use crate::preflop_trainer::models::{
    DifficultyLevel, TrainerPosition, TrainerSpot, TrainerVerdict,
};
use crate::preflop_trainer::rules::classify_spot;

const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
/// Effective stacks the trainer drills at, in big blinds.
const EFFECTIVE_STACKS: [u32; 5] = [20, 30, 40, 60, 100];
/// Share of rounds converted to a pocket pair.
const PAIR_CHANCE: f64 = 0.25;

/// What kind of round to deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerRoundRequest {
    pub level: DifficultyLevel,
    /// Fix the seat, or `None` to draw one uniformly.
    pub position_focus: Option<TrainerPosition>,
    /// Reproduce the exact same round every time; `None` draws fresh
    /// entropy.
    pub rng_seed: Option<u64>,
}

impl TrainerRoundRequest {
    pub fn new(level: DifficultyLevel) -> Self {
        Self { level, position_focus: None, rng_seed: None }
    }
}

/// One dealt practice round, verdict included so a surface can grade the
/// player's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerRound {
    pub cards: [Card; 2],
    pub spot: TrainerSpot,
    pub effective_bb: u32,
    pub verdict: TrainerVerdict,
}

/// Deal a fresh unopened-pot round and classify it.
pub fn deal_round(request: &TrainerRoundRequest) -> TrainerRound {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let rank1 = Rank(rng.gen_range(2..=14));
    let mut rank2 = Rank(rng.gen_range(2..=14));
    while rank2 == rank1 {
        rank2 = Rank(rng.gen_range(2..=14));
    }
    let suit1 = SUITS[rng.gen_range(0..SUITS.len())];
    let mut suit2 = SUITS[rng.gen_range(0..SUITS.len())];

    // Distinct-rank draws under-represent pairs, so convert a fixed share.
    // A pair is offsuit by construction.
    if rng.gen_bool(PAIR_CHANCE) {
        rank2 = rank1;
        while suit2 == suit1 {
            suit2 = SUITS[rng.gen_range(0..SUITS.len())];
        }
    }

    let position = match request.position_focus {
        Some(p) => p,
        None    => TrainerPosition::ALL[rng.gen_range(0..TrainerPosition::ALL.len())],
    };
    let effective_bb = EFFECTIVE_STACKS[rng.gen_range(0..EFFECTIVE_STACKS.len())];

    let spot = TrainerSpot::new(rank1, rank2, suit1 == suit2, position, request.level);
    let verdict = classify_spot(&spot);

    TrainerRound {
        cards: [
            Card { rank: rank1, suit: suit1 },
            Card { rank: rank2, suit: suit2 },
        ],
        spot,
        effective_bb,
        verdict,
    }
}

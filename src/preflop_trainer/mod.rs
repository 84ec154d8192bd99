//! Preflop practice trainer — deterministic unopened-pot advice plus seeded
//! round generation.
//!
//! ## Module overview
//!
//! | Module   | Purpose |
//! |----------|---------|
//! | `models` | Spots, positions, difficulty levels, verdicts |
//! | `rules`  | Ordered guarded rule list and `classify_spot` |
//! | `dealer` | Seeded random round generation with the verdict embedded |

pub mod dealer;
pub mod models;
pub mod rules;

pub use dealer::{deal_round, TrainerRound, TrainerRoundRequest};
pub use models::{
    DifficultyLevel, PositionBucket, TrainerAction, TrainerPosition, TrainerSpot,
    TrainerVerdict,
};
pub use rules::{classify_spot, PreflopRule};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_flow::models::Rank;
use crate::preflop_trainer::rules::PreflopRule;

/// Positions the trainer drills (BB is never folded-to in an unopened pot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainerPosition {
    UTG,
    HJ,
    CO,
    BTN,
    SB,
}

impl TrainerPosition {
    pub const ALL: [TrainerPosition; 5] = [
        TrainerPosition::UTG,
        TrainerPosition::HJ,
        TrainerPosition::CO,
        TrainerPosition::BTN,
        TrainerPosition::SB,
    ];

    /// Range-width bucket for this seat.
    pub fn bucket(self) -> PositionBucket {
        match self {
            TrainerPosition::UTG                      => PositionBucket::Tight,
            TrainerPosition::HJ | TrainerPosition::SB => PositionBucket::Mid,
            TrainerPosition::CO | TrainerPosition::BTN => PositionBucket::Late,
        }
    }
}

impl fmt::Display for TrainerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrainerPosition::UTG => "UTG",
            TrainerPosition::HJ  => "HJ",
            TrainerPosition::CO  => "CO",
            TrainerPosition::BTN => "BTN",
            TrainerPosition::SB  => "SB",
        };
        write!(f, "{}", s)
    }
}

/// How wide a range the seat supports: early seats play tight, the cutoff
/// and button play wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionBucket {
    Tight,
    Mid,
    Late,
}

/// Trainer difficulty. Higher levels loosen every threshold by one notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Beginner,
        DifficultyLevel::Intermediate,
        DifficultyLevel::Advanced,
    ];

    /// Index into the per-rule threshold tables.
    pub fn loosen(self) -> usize {
        match self {
            DifficultyLevel::Beginner     => 0,
            DifficultyLevel::Intermediate => 1,
            DifficultyLevel::Advanced     => 2,
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyLevel::Beginner     => write!(f, "Beginner"),
            DifficultyLevel::Intermediate => write!(f, "Intermediate"),
            DifficultyLevel::Advanced     => write!(f, "Advanced"),
        }
    }
}

/// The three answers the trainer grades against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainerAction {
    Fold,
    Call,
    Raise,
}

impl fmt::Display for TrainerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainerAction::Fold  => write!(f, "Fold"),
            TrainerAction::Call  => write!(f, "Call"),
            TrainerAction::Raise => write!(f, "Raise"),
        }
    }
}

/// One unopened-pot decision point, fully describing the classifier input.
///
/// `rank1 >= rank2` always; build through [`TrainerSpot::new`] to keep that
/// canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerSpot {
    pub rank1: Rank,
    pub rank2: Rank,
    pub suited: bool,
    pub position: TrainerPosition,
    pub level: DifficultyLevel,
}

impl TrainerSpot {
    pub fn new(
        rank1: Rank,
        rank2: Rank,
        suited: bool,
        position: TrainerPosition,
        level: DifficultyLevel,
    ) -> Self {
        let (rank1, rank2) = if rank2 > rank1 { (rank2, rank1) } else { (rank1, rank2) };
        Self { rank1, rank2, suited, position, level }
    }

    pub fn is_pair(&self) -> bool {
        self.rank1 == self.rank2
    }

    /// Canonical (high, low) rank-value pair for set membership checks.
    pub fn key(&self) -> (u8, u8) {
        (self.rank1.0, self.rank2.0)
    }

    pub fn bucket(&self) -> PositionBucket {
        self.position.bucket()
    }

    pub fn loosen(&self) -> usize {
        self.level.loosen()
    }
}

impl fmt::Display for TrainerSpot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.is_pair() {
            String::new()
        } else if self.suited {
            "s".to_string()
        } else {
            "o".to_string()
        };
        write!(f, "{}{}{} from {}", self.rank1, self.rank2, tag, self.position)
    }
}

/// The classifier's recommendation for one spot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerVerdict {
    pub action: TrainerAction,
    pub rationale: String,
    /// Which rule produced the verdict; `None` for the default fold.
    pub rule: Option<PreflopRule>,
}

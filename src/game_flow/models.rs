use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Clubs => write!(f, "c"),
            Suit::Diamonds => write!(f, "d"),
            Suit::Hearts => write!(f, "h"),
            Suit::Spades => write!(f, "s"),
        }
    }
}

/// Rank 2..=14 where 14 = Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// One betting round, derived from how many community cards are out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Street implied by the number of board cards (0/3/4/5).
    pub fn from_board_len(n: usize) -> Street {
        match n {
            0 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "Preflop"),
            Street::Flop    => write!(f, "Flop"),
            Street::Turn    => write!(f, "Turn"),
            Street::River   => write!(f, "River"),
        }
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// The six action kinds the interactive surface can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::Fold  => "fold",
            ActionKind::Check => "check",
            ActionKind::Call  => "call",
            ActionKind::Bet   => "bet",
            ActionKind::Raise => "raise",
            ActionKind::AllIn => "allin",
        };
        write!(f, "{}", s)
    }
}

/// Parse error for [`ActionKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action kind: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for ActionKind {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fold"  => Ok(ActionKind::Fold),
            "check" => Ok(ActionKind::Check),
            "call"  => Ok(ActionKind::Call),
            "bet"   => Ok(ActionKind::Bet),
            "raise" => Ok(ActionKind::Raise),
            "allin" => Ok(ActionKind::AllIn),
            other   => Err(UnknownAction(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Engine snapshot (read-only to this crate)
// ---------------------------------------------------------------------------

/// What the engine asks of the human when it is their turn.
///
/// Exists exactly when [`GameSnapshot::waiting_for_human`] is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Chips needed to match the current bet.
    pub to_call: u32,
    /// Smallest total bet the human may raise to.
    pub min_raise_to: u32,
    /// Chips the human still has behind.
    pub you_stack: u32,
    /// Chips the human already put in on this street.
    pub you_bet_street: u32,
    /// Total pot at the moment of the prompt.
    pub pot: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub stack: u32,
    pub bet_street: u32,
    pub folded: bool,
    pub all_in: bool,
    pub is_human: bool,
    /// 0 cards (mucked/unknown) or exactly 2.
    pub hole: Vec<Card>,
}

/// Style statistics the engine tracks about the human player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanStats {
    pub hands: u32,
    pub vpip_hands: u32,
    pub postflop_aggr: u32,
    pub postflop_calls: u32,
    pub folds_to_bet: u32,
}

/// One parameterized automated-opponent policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuProfile {
    pub aggression: f64,
    pub randomness: f64,
}

/// Running reward for one profile, maintained by the engine's bandit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuProfileStats {
    pub total_reward: f64,
    pub count: u32,
}

impl CpuProfileStats {
    /// Average reward so far, 0.0 before any sample.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_reward / f64::from(self.count)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuLearner {
    pub profiles: Vec<CpuProfile>,
    pub stats: Vec<CpuProfileStats>,
}

/// Immutable view of the table after one engine step.
///
/// Produced by every [`crate::game_flow::GameEngine::advance`] call; the
/// controller only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub hand_active: bool,
    pub waiting_for_human: bool,
    /// 0–5 community cards.
    pub board: Vec<Card>,
    pub pot: u32,
    pub current_bet: u32,
    pub players: Vec<PlayerSnapshot>,
    pub dealer_index: usize,
    pub sb_index: usize,
    pub bb_index: usize,
    /// Seat currently acting, while a hand is live.
    pub acting_index: Option<usize>,
    /// Present exactly while it is the human's turn.
    pub prompt: Option<Prompt>,
    /// Append-only hand narration.
    pub log: Vec<String>,
    pub human_stats: HumanStats,
    pub cpu_learner: CpuLearner,
}

impl GameSnapshot {
    /// The human seat, if seated.
    pub fn human(&self) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| p.is_human)
    }

    /// Automated opponents still contesting the pot.
    pub fn live_opponents(&self) -> usize {
        self.players
            .iter()
            .filter(|p| !p.is_human && !p.folded)
            .count()
    }

    pub fn street(&self) -> Street {
        Street::from_board_len(self.board.len())
    }
}

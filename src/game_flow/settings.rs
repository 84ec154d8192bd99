use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest Monte-Carlo iteration count the engine accepts.
pub const MC_ITERS_FLOOR: u32 = 60;

/// Validation failures for [`GameSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("players must be 2-9 (got {0})")]
    PlayersOutOfRange(u8),

    #[error("starting stack must be 20-10000 (got {0})")]
    StackOutOfRange(u32),

    #[error("blinds must satisfy 0 < small blind < big blind (got {sb}/{bb})")]
    BadBlinds { sb: u32, bb: u32 },
}

/// Immutable table configuration. Changing any of it re-creates the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub players: u8,
    pub start_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
    pub cpu_aggression: f64,
    pub cpu_randomness: f64,
    pub mc_iters_preflop: u32,
    pub mc_iters_postflop: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        // The "Normal" preset at a 6-handed table.
        Self {
            players: 6,
            start_stack: 200,
            small_blind: 1,
            big_blind: 2,
            seed: None,
            cpu_aggression: 1.00,
            cpu_randomness: 0.45,
            mc_iters_preflop: 220,
            mc_iters_postflop: 320,
        }
    }
}

impl GameSettings {
    /// Check the ranges the interactive surface promises.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(2..=9).contains(&self.players) {
            return Err(SettingsError::PlayersOutOfRange(self.players));
        }
        if !(20..=10_000).contains(&self.start_stack) {
            return Err(SettingsError::StackOutOfRange(self.start_stack));
        }
        if self.small_blind == 0 || self.small_blind >= self.big_blind {
            return Err(SettingsError::BadBlinds {
                sb: self.small_blind,
                bb: self.big_blind,
            });
        }
        Ok(())
    }

    /// Same settings with the Monte-Carlo iteration floors applied.
    pub fn normalized(mut self) -> Self {
        self.mc_iters_preflop = self.mc_iters_preflop.max(MC_ITERS_FLOOR);
        self.mc_iters_postflop = self.mc_iters_postflop.max(MC_ITERS_FLOOR);
        self
    }
}

// ---------------------------------------------------------------------------
// CPU difficulty presets
// ---------------------------------------------------------------------------

/// Canned opponent difficulty levels (higher = smarter but slower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuPreset {
    Beginner,
    Normal,
    Strong,
    Pro,
}

impl CpuPreset {
    pub const ALL: [CpuPreset; 4] = [
        CpuPreset::Beginner,
        CpuPreset::Normal,
        CpuPreset::Strong,
        CpuPreset::Pro,
    ];

    /// (aggression, randomness, mc_preflop, mc_postflop) for this preset.
    fn tuning(self) -> (f64, f64, u32, u32) {
        match self {
            CpuPreset::Beginner => (0.90, 0.65, 120, 180),
            CpuPreset::Normal   => (1.00, 0.45, 220, 320),
            CpuPreset::Strong   => (1.15, 0.25, 450, 650),
            CpuPreset::Pro      => (1.25, 0.12, 800, 1100),
        }
    }

    /// New settings with this preset's tuning, keeping the table shape
    /// (players, stacks, blinds, seed) from `base`.
    pub fn apply_to(self, base: &GameSettings) -> GameSettings {
        let (aggression, randomness, mc_pre, mc_post) = self.tuning();
        GameSettings {
            cpu_aggression: aggression,
            cpu_randomness: randomness,
            mc_iters_preflop: mc_pre,
            mc_iters_postflop: mc_post,
            ..base.clone()
        }
    }
}

impl fmt::Display for CpuPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuPreset::Beginner => write!(f, "Beginner"),
            CpuPreset::Normal   => write!(f, "Normal"),
            CpuPreset::Strong   => write!(f, "Strong"),
            CpuPreset::Pro      => write!(f, "Pro"),
        }
    }
}

//! Turn-based hand flow — the controller that keeps hands moving, and the
//! pure helpers it leans on.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: cards, actions, prompts, engine snapshots |
//! | `engine`     | The `GameEngine` trait the controller drives, and its errors |
//! | `settings`   | Table configuration, validation, and CPU difficulty presets |
//! | `actions`    | Legal-action resolution, default bet/raise sizing, amount parsing |
//! | `controller` | The hand-progression loop, auto-next timer, and command channel |
//! | `view`       | Snapshot-to-JSON table views for rendering surfaces |

pub mod actions;
pub mod controller;
pub mod engine;
pub mod models;
pub mod settings;
pub mod view;

// Re-export the surface callers actually touch so `game_flow::HandController`
// works without reaching into sub-modules.
pub use actions::{default_bet_size, default_raise_size, legal_actions, parse_amount};
pub use controller::{AutoNextTimer, FlowCommand, FlowConfig, FlowError, HandController};
pub use engine::{EngineError, GameEngine};
pub use models::{
    ActionKind, Card, CpuLearner, CpuProfile, CpuProfileStats, GameSnapshot,
    HumanStats, PlayerSnapshot, Prompt, Rank, Street, Suit, UnknownAction,
};
pub use settings::{CpuPreset, GameSettings, SettingsError, MC_ITERS_FLOOR};
pub use view::{format_cards, table_view};

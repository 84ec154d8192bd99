//! # holdem_trainer
//!
//! The turn-based core of a heads-up-against-CPUs hold'em trainer.
//!
//! Three pieces, usable together or alone:
//!
//! 1. **Hand flow** ([`game_flow`]) — a [`HandController`] that drives an
//!    external [`GameEngine`] one atomic step at a time: automated turns run
//!    with a short cooperative yield between them, the human gets exactly one
//!    prompt per decision point, and a settled hand flows into the next one
//!    after a cancellable dwell. Engine calls are strictly serialized because
//!    a single task owns the engine.
//! 2. **Action resolver** ([`game_flow::actions`]) — pure helpers that turn a
//!    prompt into the action set worth offering, fill in default bet/raise
//!    sizes when the amount field is left blank, and normalize raw amount
//!    text.
//! 3. **Preflop trainer** ([`preflop_trainer`]) — a deterministic classifier
//!    for unopened-pot spots (ordered rule list, first match wins) plus a
//!    seeded round dealer, so drills are reproducible under a fixed seed.
//!
//! ## Quick start
//!
//! ```rust
//! use holdem_trainer::{
//!     classify_spot, deal_round, legal_actions, parse_amount, DifficultyLevel,
//!     Prompt, TrainerRoundRequest,
//! };
//!
//! // Deal a reproducible practice round and read the graded advice:
//! let round = deal_round(&TrainerRoundRequest {
//!     level: DifficultyLevel::Intermediate,
//!     position_focus: None,
//!     rng_seed: Some(42),
//! });
//! println!("{}: {}", round.spot, round.verdict.action);
//! assert_eq!(round.verdict, classify_spot(&round.spot));
//!
//! // Resolve what to offer the human for a prompt:
//! let prompt = Prompt { to_call: 10, min_raise_to: 20, you_stack: 190, you_bet_street: 0, pot: 30 };
//! for action in legal_actions(Some(&prompt)) {
//!     println!("- {action}");
//! }
//!
//! // Blank or malformed amounts mean "use the default sizing":
//! assert_eq!(parse_amount(" 25 "), 25);
//! assert_eq!(parse_amount("all of it"), 0);
//! ```
//!
//! Driving a live table needs an engine and a runtime: implement
//! [`GameEngine`], hand it to [`HandController::new`], and feed
//! [`FlowCommand`]s into [`HandController::run`].

pub mod game_flow;
pub mod preflop_trainer;

// Convenience re-exports so callers can use `holdem_trainer::HandController`
// directly without reaching into sub-modules.
pub use game_flow::{
    default_bet_size, default_raise_size, legal_actions, parse_amount, table_view,
    ActionKind, Card, CpuPreset, EngineError, FlowCommand, FlowConfig, GameEngine,
    GameSettings, GameSnapshot, HandController, PlayerSnapshot, Prompt, Rank,
    SettingsError, Street, Suit,
};
pub use preflop_trainer::{
    classify_spot, deal_round, DifficultyLevel, TrainerAction, TrainerPosition,
    TrainerRound, TrainerRoundRequest, TrainerSpot, TrainerVerdict,
};

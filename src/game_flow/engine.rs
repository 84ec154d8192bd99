use thiserror::Error;

use crate::game_flow::models::{ActionKind, Card, GameSnapshot};

/// Failures reported by the game engine collaborator.
///
/// The controller never retries any of these: a failing `advance` or
/// `apply_human_action` stops the current drive chain and the error is
/// returned to the caller. Estimation failures are the one exception — the
/// controller catches them and degrades to "no estimate".
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no hand is active")]
    NoActiveHand,

    #[error("a hand is already in progress")]
    HandAlreadyInProgress,

    #[error("engine is not waiting for a human decision")]
    NotAwaitingHuman,

    #[error("action {0} is not legal at this prompt")]
    IllegalAction(ActionKind),

    #[error("engine reported waiting for the human without a prompt")]
    MissingPrompt,

    #[error("win-probability estimation failed: {0}")]
    Estimation(String),

    #[error("engine failure: {0}")]
    Internal(String),
}

/// The external game engine this crate drives.
///
/// Shuffling, dealing, hand evaluation, settlement and opponent policy all
/// live behind this trait; the controller only sequences calls into it and
/// reads the snapshots that come back. One call must fully complete before
/// the next is issued — the controller guarantees that by owning the engine
/// exclusively.
pub trait GameEngine {
    /// Reset per-hand state and post blinds for a fresh hand.
    fn start_new_hand(&mut self) -> Result<(), EngineError>;

    /// Execute exactly one atomic step and return the resulting snapshot.
    fn advance(&mut self) -> Result<GameSnapshot, EngineError>;

    /// Submit the human's decision. Exact legality is the engine's concern;
    /// the resolver's action set is only a UI-level approximation.
    fn apply_human_action(&mut self, action: ActionKind, amount: u32) -> Result<(), EngineError>;

    /// Monte-Carlo win probability for `hole` against `opponents` unseen
    /// hands. May fail; callers must degrade to "no estimate".
    fn estimate_win_probability(
        &mut self,
        hole: &[Card],
        board: &[Card],
        opponents: usize,
        iterations: u32,
    ) -> Result<f64, EngineError>;
}

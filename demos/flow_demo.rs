//! Drive one scripted hand end to end.
//!
//! Run with: `RUST_LOG=debug cargo run --example flow_demo`
//!
//! The crate ships no game engine of its own, so this demo wires a canned
//! one: a fixed list of snapshots standing in for blinds, a CPU limp, the
//! human's decision point, and settlement. It shows the pieces a real
//! surface would use:
//!
//! 1. `HandController::new` with an engine factory and a `FlowConfig`.
//! 2. `start_hand` driving automated turns until the human must act.
//! 3. `legal_actions` plus the default sizing for the prompt.
//! 4. `submit_human_action` with a blank amount (default sizing kicks in).
//! 5. `table_view` rendering each published snapshot as JSON.

use std::collections::VecDeque;

use holdem_trainer::{
    legal_actions, table_view, ActionKind, Card, EngineError, FlowConfig, GameEngine,
    GameSettings, GameSnapshot, HandController, PlayerSnapshot, Prompt, Rank, Suit,
};

struct CannedEngine {
    steps: VecDeque<GameSnapshot>,
}

impl GameEngine for CannedEngine {
    fn start_new_hand(&mut self) -> Result<(), EngineError> {
        Ok(())
    }

    fn advance(&mut self) -> Result<GameSnapshot, EngineError> {
        self.steps
            .pop_front()
            .ok_or_else(|| EngineError::Internal("script exhausted".to_string()))
    }

    fn apply_human_action(&mut self, _action: ActionKind, _amount: u32) -> Result<(), EngineError> {
        Ok(())
    }

    fn estimate_win_probability(
        &mut self,
        _hole: &[Card],
        _board: &[Card],
        _opponents: usize,
        _iterations: u32,
    ) -> Result<f64, EngineError> {
        Ok(0.58)
    }
}

fn card(rank: u8, suit: Suit) -> Card {
    Card { rank: Rank(rank), suit }
}

fn players(human_stack: u32, cpu_bet: u32) -> Vec<PlayerSnapshot> {
    vec![
        PlayerSnapshot {
            name: "You".to_string(),
            stack: human_stack,
            is_human: true,
            hole: vec![card(14, Suit::Hearts), card(13, Suit::Diamonds)],
            ..Default::default()
        },
        PlayerSnapshot {
            name: "CPU 1".to_string(),
            stack: 200 - cpu_bet,
            bet_street: cpu_bet,
            ..Default::default()
        },
    ]
}

fn canned_hand() -> CannedEngine {
    let blinds = GameSnapshot {
        hand_active: true,
        players: players(199, 2),
        pot: 3,
        current_bet: 2,
        bb_index: 1,
        acting_index: Some(1),
        log: vec!["You post SB 1".to_string(), "CPU 1 posts BB 2".to_string()],
        ..Default::default()
    };
    let your_turn = GameSnapshot {
        waiting_for_human: true,
        acting_index: Some(0),
        prompt: Some(Prompt {
            to_call: 1,
            min_raise_to: 4,
            you_stack: 199,
            you_bet_street: 1,
            pot: 3,
        }),
        ..blinds.clone()
    };
    let settled = GameSnapshot {
        hand_active: false,
        players: players(203, 0),
        pot: 0,
        current_bet: 0,
        log: vec!["CPU 1 folds".to_string(), "You win 4".to_string()],
        ..Default::default()
    };
    CannedEngine {
        steps: VecDeque::from([blinds, your_turn, settled]),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), EngineError> {
    env_logger::init();

    let config = FlowConfig {
        auto_next_hand: false,
        ..Default::default()
    };
    let (mut controller, _updates) =
        HandController::new(GameSettings::default(), |_| canned_hand(), config);

    controller.start_hand().await?;

    println!("━━━ decision point ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{:#}", table_view(controller.snapshot(), controller.win_estimate()));
    print!("  Offered:");
    for action in legal_actions(controller.snapshot().prompt.as_ref()) {
        print!(" {action}");
    }
    println!();

    // A surface submits the action name as text; blank amounts resolve
    // through the default sizing (calls need none).
    let action: ActionKind = "call"
        .parse()
        .map_err(|e| EngineError::Internal(format!("{e}")))?;
    controller.submit_human_action(action, "").await?;

    println!("━━━ hand settled ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{:#}", table_view(controller.snapshot(), None));
    Ok(())
}

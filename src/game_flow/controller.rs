//! The hand-progression controller.
//!
//! A single task owns the engine and sequences every call into it, so engine
//! steps are strictly serialized by construction. Suspension is explicit and
//! cancellable: a short yield between automated turns, and one auto-next
//! deadline before the following hand starts on its own. Every fresh
//! snapshot is published on a `watch` channel for whatever surface is
//! rendering the table.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::watch;
use tokio::time::Instant;

use crate::game_flow::actions::{default_bet_size, default_raise_size, legal_actions, parse_amount};
use crate::game_flow::engine::{EngineError, GameEngine};
use crate::game_flow::models::{ActionKind, GameSnapshot};
use crate::game_flow::settings::{CpuPreset, GameSettings, SettingsError};

/// Timing knobs for the drive loop.
#[derive(Debug, Clone, Copy)]
pub struct FlowConfig {
    /// Pause between two automated turns.
    pub step_yield: Duration,
    /// Dwell before the next hand auto-starts after settlement.
    pub auto_next_dwell: Duration,
    /// Whether settled hands flow into the next one automatically.
    pub auto_next_hand: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            step_yield: Duration::from_millis(10),
            auto_next_dwell: Duration::from_millis(1200),
            auto_next_hand: true,
        }
    }
}

/// The single pending auto-next-hand deadline.
///
/// At most one deadline exists at a time: scheduling while pending is a
/// no-op, and every path that starts a hand cancels it first.
#[derive(Debug)]
pub struct AutoNextTimer {
    dwell: Duration,
    deadline: Option<Instant>,
}

impl AutoNextTimer {
    pub fn new(dwell: Duration) -> Self {
        Self { dwell, deadline: None }
    }

    /// Arm the timer unless one is already pending. Returns whether a new
    /// deadline was set.
    pub fn schedule(&mut self) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(Instant::now() + self.dwell);
        true
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Commands the interactive surface feeds into [`HandController::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum FlowCommand {
    /// Start a fresh hand now.
    NewHand,
    /// The human's decision, with the raw amount-entry text (blank = use the
    /// default sizing).
    Submit { action: ActionKind, amount: String },
    /// Replace the settings and re-create the engine.
    ApplySettings(GameSettings),
    /// Re-tune the opponents and re-create the engine.
    ApplyPreset(CpuPreset),
}

/// Failures from settings-changing controller entry points.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Drives automated turns, hands control to the human exactly once per
/// decision point, and keeps hands flowing.
///
/// `make_engine` re-creates the engine whenever settings or the CPU preset
/// change.
pub struct HandController<E, F>
where
    E: GameEngine,
    F: FnMut(&GameSettings) -> E,
{
    engine: E,
    make_engine: F,
    settings: GameSettings,
    config: FlowConfig,
    snapshot: GameSnapshot,
    win_estimate: Option<f64>,
    auto_next: AutoNextTimer,
    updates: watch::Sender<GameSnapshot>,
}

impl<E, F> HandController<E, F>
where
    E: GameEngine,
    F: FnMut(&GameSettings) -> E,
{
    /// Build a controller plus the receiver surfaces subscribe to for
    /// snapshot updates.
    pub fn new(
        settings: GameSettings,
        mut make_engine: F,
        config: FlowConfig,
    ) -> (Self, watch::Receiver<GameSnapshot>) {
        let settings = settings.normalized();
        let engine = make_engine(&settings);
        let (updates, rx) = watch::channel(GameSnapshot::default());
        let controller = Self {
            engine,
            make_engine,
            settings,
            auto_next: AutoNextTimer::new(config.auto_next_dwell),
            config,
            snapshot: GameSnapshot::default(),
            win_estimate: None,
            updates,
        };
        (controller, rx)
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Last win-probability estimate shown to the human, if one could be
    /// computed for the current decision point.
    pub fn win_estimate(&self) -> Option<f64> {
        self.win_estimate
    }

    pub fn auto_next_pending(&self) -> bool {
        self.auto_next.pending()
    }

    /// Actions worth offering right now (empty between hands).
    pub fn legal_now(&self) -> &'static [ActionKind] {
        if !self.snapshot.hand_active {
            return &[];
        }
        legal_actions(self.snapshot.prompt.as_ref())
    }

    /// Start a fresh hand: cancel a pending auto-next, reset the engine's
    /// per-hand state, take the first step, then drive.
    pub async fn start_hand(&mut self) -> Result<(), EngineError> {
        self.auto_next.cancel();
        log::debug!("starting a new hand");
        self.engine.start_new_hand()?;
        self.take_step()?;
        self.drive().await
    }

    /// Run automated turns until the hand ends or the human must act.
    ///
    /// One engine step per iteration, with a cooperative yield before the
    /// next one — never a tight synchronous loop. Engine failures stop the
    /// chain immediately and propagate.
    pub async fn drive(&mut self) -> Result<(), EngineError> {
        while self.snapshot.hand_active && !self.snapshot.waiting_for_human {
            self.take_step()?;
            if self.snapshot.hand_active && !self.snapshot.waiting_for_human {
                tokio::time::sleep(self.config.step_yield).await;
            }
        }
        if self.snapshot.waiting_for_human {
            self.refresh_estimate();
        }
        if !self.snapshot.hand_active && self.config.auto_next_hand && self.auto_next.schedule() {
            log::debug!("hand settled; auto-next armed");
        }
        Ok(())
    }

    /// Apply the human's decision and resume driving.
    ///
    /// A blank or malformed amount resolves through the default-sizing
    /// rules; it is never an error.
    pub async fn submit_human_action(
        &mut self,
        action: ActionKind,
        raw_amount: &str,
    ) -> Result<(), EngineError> {
        let amount = self.resolve_amount(action, raw_amount);
        log::debug!("human plays {action} for {amount}");
        self.engine.apply_human_action(action, amount)?;
        self.take_step()?;
        self.drive().await
    }

    /// Replace the settings, rebuild the engine, and deal a fresh hand.
    pub async fn apply_settings(&mut self, settings: GameSettings) -> Result<(), FlowError> {
        settings.validate()?;
        self.settings = settings.normalized();
        self.rebuild_engine();
        self.start_hand().await?;
        Ok(())
    }

    /// Re-tune the opponents (preserving the table shape), rebuild the
    /// engine, and deal a fresh hand.
    pub async fn apply_preset(&mut self, preset: CpuPreset) -> Result<(), EngineError> {
        log::info!("switching CPU preset to {preset}");
        self.settings = preset.apply_to(&self.settings).normalized();
        self.rebuild_engine();
        self.start_hand().await
    }

    /// Imperative shell: process surface commands, firing the auto-next
    /// deadline in between. Returns when the command channel closes or the
    /// engine fails.
    pub async fn run(mut self, mut commands: UnboundedReceiver<FlowCommand>) -> Result<(), EngineError> {
        loop {
            let cmd = match self.auto_next.deadline() {
                Some(deadline) => tokio::select! {
                    biased;
                    cmd = commands.recv() => match cmd {
                        Some(c) => Some(c),
                        None => break,
                    },
                    _ = tokio::time::sleep_until(deadline) => {
                        self.auto_next.cancel();
                        if !self.snapshot.hand_active {
                            self.start_hand().await?;
                        }
                        None
                    }
                },
                None => match commands.recv().await {
                    Some(c) => Some(c),
                    None => break,
                },
            };
            if let Some(cmd) = cmd {
                self.handle(cmd).await?;
            }
        }
        Ok(())
    }

    async fn handle(&mut self, cmd: FlowCommand) -> Result<(), EngineError> {
        match cmd {
            FlowCommand::NewHand => self.start_hand().await,
            FlowCommand::Submit { action, amount } => {
                if !self.snapshot.waiting_for_human {
                    log::debug!("ignoring {action}: not the human's turn");
                    return Ok(());
                }
                self.submit_human_action(action, &amount).await
            }
            FlowCommand::ApplySettings(settings) => match self.apply_settings(settings).await {
                Ok(()) => Ok(()),
                Err(FlowError::Settings(e)) => {
                    log::warn!("rejected settings: {e}");
                    Ok(())
                }
                Err(FlowError::Engine(e)) => Err(e),
            },
            FlowCommand::ApplyPreset(preset) => self.apply_preset(preset).await,
        }
    }

    /// One engine step; the snapshot contract is checked before publishing.
    fn take_step(&mut self) -> Result<(), EngineError> {
        let snapshot = self.engine.advance()?;
        if snapshot.waiting_for_human && snapshot.prompt.is_none() {
            return Err(EngineError::MissingPrompt);
        }
        self.snapshot = snapshot;
        let _ = self.updates.send(self.snapshot.clone());
        Ok(())
    }

    fn resolve_amount(&self, action: ActionKind, raw: &str) -> u32 {
        let typed = parse_amount(raw);
        if typed > 0 {
            return typed;
        }
        match (action, self.snapshot.prompt.as_ref()) {
            (ActionKind::Bet, Some(p)) => default_bet_size(p, self.settings.big_blind),
            (ActionKind::Raise, Some(p)) => default_raise_size(p),
            _ => 0,
        }
    }

    /// Best-effort win odds for the decision point. A failing estimator is
    /// caught here and degrades to "no estimate" — the drive chain is never
    /// interrupted for a display value.
    fn refresh_estimate(&mut self) {
        self.win_estimate = None;
        let Some(human) = self.snapshot.human() else { return };
        if human.hole.len() != 2 {
            return;
        }
        let opponents = self.snapshot.live_opponents();
        if opponents == 0 {
            return;
        }
        let base = if self.snapshot.board.is_empty() {
            self.settings.mc_iters_preflop
        } else {
            self.settings.mc_iters_postflop
        };
        let iterations = (base * 6 / 10).max(150);
        let hole = human.hole.clone();
        let board = self.snapshot.board.clone();
        match self
            .engine
            .estimate_win_probability(&hole, &board, opponents, iterations)
        {
            Ok(p) => self.win_estimate = Some(p),
            Err(e) => log::warn!("win estimate unavailable: {e}"),
        }
    }

    fn rebuild_engine(&mut self) {
        self.auto_next.cancel();
        self.engine = (self.make_engine)(&self.settings);
        self.snapshot = GameSnapshot::default();
        self.win_estimate = None;
        let _ = self.updates.send(self.snapshot.clone());
    }
}

use serde_json::{json, Value};

use crate::game_flow::models::{Card, GameSnapshot, PlayerSnapshot, Prompt};

/// Cards rendered space-joined, e.g. "Ah Kd".
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Position badge for a seat: dealer button, blinds, or nothing.
fn seat_badge(idx: usize, snapshot: &GameSnapshot) -> &'static str {
    if idx == snapshot.dealer_index {
        "D"
    } else if idx == snapshot.sb_index {
        "SB"
    } else if idx == snapshot.bb_index {
        "BB"
    } else {
        ""
    }
}

/// Short status tag for a seat.
fn seat_status(player: &PlayerSnapshot) -> &'static str {
    if player.folded {
        "FOLD"
    } else if player.all_in {
        "ALL-IN"
    } else {
        ""
    }
}

fn seat_entry(idx: usize, player: &PlayerSnapshot, snapshot: &GameSnapshot) -> Value {
    json!({
        "seat": idx,
        "name": player.name,
        "stack": player.stack,
        "bet": player.bet_street,
        "badge": seat_badge(idx, snapshot),
        "status": seat_status(player),
        "acting": snapshot.acting_index == Some(idx),
        "is_human": player.is_human,
        "cards": format_cards(&player.hole),
    })
}

/// One-line summary of what the human is being asked.
fn prompt_line(prompt: &Prompt) -> String {
    if prompt.to_call == 0 {
        format!("pot {}: check or bet (min raise to {})", prompt.pot, prompt.min_raise_to)
    } else {
        format!(
            "pot {}: {} to call, min raise to {}",
            prompt.pot, prompt.to_call, prompt.min_raise_to
        )
    }
}

/// Human style summary: VPIP percentage plus the raw postflop counters.
fn stats_block(snapshot: &GameSnapshot) -> Value {
    let stats = &snapshot.human_stats;
    let vpip = if stats.hands == 0 {
        0.0
    } else {
        100.0 * f64::from(stats.vpip_hands) / f64::from(stats.hands)
    };
    json!({
        "hands": stats.hands,
        "vpip_pct": (vpip * 10.0).round() / 10.0,
        "postflop_aggr": stats.postflop_aggr,
        "postflop_calls": stats.postflop_calls,
        "folds_to_bet": stats.folds_to_bet,
    })
}

/// Per-profile average-reward lines from the opponent learner.
fn learner_block(snapshot: &GameSnapshot) -> Value {
    let lines: Vec<Value> = snapshot
        .cpu_learner
        .profiles
        .iter()
        .zip(&snapshot.cpu_learner.stats)
        .map(|(profile, stats)| {
            json!({
                "aggression": profile.aggression,
                "randomness": profile.randomness,
                "avg_reward": (stats.average() * 100.0).round() / 100.0,
                "samples": stats.count,
            })
        })
        .collect();
    Value::Array(lines)
}

/// Map a snapshot (plus the controller's current win estimate) to a JSON
/// table view ready for any rendering surface.
pub fn table_view(snapshot: &GameSnapshot, win_estimate: Option<f64>) -> Value {
    let seats: Vec<Value> = snapshot
        .players
        .iter()
        .enumerate()
        .map(|(idx, p)| seat_entry(idx, p, snapshot))
        .collect();

    // Only the most recent narration lines; full history stays in the snapshot.
    let tail: Vec<&String> = snapshot.log.iter().rev().take(12).rev().collect();

    json!({
        "hand_active": snapshot.hand_active,
        "street": snapshot.street().to_string(),
        "board": format_cards(&snapshot.board),
        "pot": snapshot.pot,
        "current_bet": snapshot.current_bet,
        "seats": seats,
        "prompt": snapshot.prompt.as_ref().map(prompt_line),
        "win_estimate_pct": win_estimate.map(|p| (p * 1000.0).round() / 10.0),
        "human_stats": stats_block(snapshot),
        "cpu_learner": learner_block(snapshot),
        "log_tail": tail,
    })
}

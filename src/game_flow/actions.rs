//! Legal-action resolution and default bet/raise sizing.
//!
//! Everything here is a pure function of the [`Prompt`] snapshot — no engine
//! state is touched. The action set is a deliberate UI-level approximation:
//! it does not special-case a player too short to complete every listed
//! action, because exact enforcement belongs to the game engine.

use crate::game_flow::models::{ActionKind, Prompt};

/// Actions worth offering to the human for the given prompt.
///
/// No prompt (not the human's turn) yields the empty set. With nothing to
/// call, checking and betting are open; facing a bet, folding, calling and
/// raising are. Going all-in is always offered.
pub fn legal_actions(prompt: Option<&Prompt>) -> &'static [ActionKind] {
    match prompt {
        None => &[],
        Some(p) if p.to_call == 0 => &[ActionKind::Check, ActionKind::Bet, ActionKind::AllIn],
        Some(_) => &[
            ActionKind::Fold,
            ActionKind::Call,
            ActionKind::Raise,
            ActionKind::AllIn,
        ],
    }
}

/// Default bet when the human leaves the amount blank:
/// the larger of 2 big blinds and half the pot, capped by the stack.
///
/// All operands are non-negative, so `/` is exact floor division here. The
/// lower clamp of 1 keeps the function total; a prompt implies a live stack.
pub fn default_bet_size(prompt: &Prompt, big_blind: u32) -> u32 {
    let target = (big_blind * 2).max(prompt.pot / 2);
    target.clamp(1, prompt.you_stack.max(1))
}

/// Default raise-to when the human leaves the amount blank:
/// the minimum raise plus half the pot, capped by stack + street bet
/// (the most the human can have in front of them this street).
pub fn default_raise_size(prompt: &Prompt) -> u32 {
    let target = prompt.min_raise_to.max(prompt.min_raise_to + prompt.pot / 2);
    let cap = prompt.you_stack.saturating_add(prompt.you_bet_street);
    target.clamp(1, cap.max(1))
}

/// Normalize raw amount-entry text to a chip count.
///
/// Only strings that parse as a non-negative integer are accepted; blank,
/// malformed, or negative input yields 0, which downstream means "unset —
/// use the default". This never errors: bad input is an expected condition,
/// not a failure.
pub fn parse_amount(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(to_call: u32, min_raise_to: u32, you_stack: u32, you_bet_street: u32, pot: u32) -> Prompt {
        Prompt { to_call, min_raise_to, you_stack, you_bet_street, pot }
    }

    #[test]
    fn no_prompt_means_no_actions() {
        assert!(legal_actions(None).is_empty());
    }

    #[test]
    fn unopened_prompt_offers_check_bet_allin() {
        let p = prompt(0, 2, 100, 0, 3);
        assert_eq!(
            legal_actions(Some(&p)),
            &[ActionKind::Check, ActionKind::Bet, ActionKind::AllIn]
        );
    }

    #[test]
    fn facing_a_bet_offers_fold_call_raise_allin() {
        let p = prompt(10, 20, 100, 0, 30);
        assert_eq!(
            legal_actions(Some(&p)),
            &[ActionKind::Fold, ActionKind::Call, ActionKind::Raise, ActionKind::AllIn]
        );
    }

    #[test]
    fn default_bet_is_two_bb_in_a_small_pot() {
        // pot/2 = 1 < 2*bb = 4
        let p = prompt(0, 2, 100, 0, 3);
        assert_eq!(default_bet_size(&p, 2), 4);
    }

    #[test]
    fn default_bet_is_half_pot_in_a_big_pot() {
        let p = prompt(0, 2, 100, 0, 60);
        assert_eq!(default_bet_size(&p, 2), 30);
    }

    #[test]
    fn default_bet_never_exceeds_stack() {
        let p = prompt(0, 2, 12, 0, 60);
        assert_eq!(default_bet_size(&p, 2), 12);
    }

    #[test]
    fn default_raise_adds_half_pot_to_min_raise() {
        let p = prompt(10, 20, 200, 5, 40);
        assert_eq!(default_raise_size(&p), 40);
    }

    #[test]
    fn default_raise_respects_min_raise_and_cap() {
        let p = prompt(10, 20, 200, 5, 0);
        let r = default_raise_size(&p);
        assert!(r >= p.min_raise_to);
        assert!(r <= p.you_stack + p.you_bet_street);

        let short = prompt(10, 20, 8, 3, 100);
        assert_eq!(default_raise_size(&short), 11);
    }

    #[test]
    fn parse_amount_accepts_non_negative_integers() {
        assert_eq!(parse_amount("12"), 12);
        assert_eq!(parse_amount("  7 "), 7);
        assert_eq!(parse_amount("0"), 0);
    }

    #[test]
    fn parse_amount_normalizes_bad_input_to_unset() {
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("abc"), 0);
        assert_eq!(parse_amount("-5"), 0);
        assert_eq!(parse_amount("12.5"), 0);
    }
}

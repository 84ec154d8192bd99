//! The ordered rule list behind the trainer's unopened-pot advice.
//!
//! Pure and deterministic: the same spot always yields the same verdict.
//! Rules are evaluated strictly in [`PreflopRule::ORDER`]; the first one
//! that matches wins, so adding a rule cannot silently reorder existing
//! outcomes. Randomness belongs to hand generation upstream, never here.

use serde::{Deserialize, Serialize};

use crate::preflop_trainer::models::{
    PositionBucket, TrainerAction, TrainerSpot, TrainerVerdict,
};

// ---------------------------------------------------------------------------
// Range tables, indexed by loosen (0 = Beginner .. 2 = Advanced)
// ---------------------------------------------------------------------------

/// Lowest pair rank worth a raise from any seat.
const PAIR_RAISE_CUT: [u8; 3] = [9, 8, 7];
/// Lowest pair rank worth a raise from a mid or late seat.
const PAIR_MID_CUT: [u8; 3] = [6, 5, 4];
/// Lowest high-card rank for a late-position suited steal.
const LATE_SUITED_CUT: [u8; 3] = [10, 9, 8];

/// AA, KK, QQ, JJ, AK.
const PREMIUMS: [(u8, u8); 5] = [(14, 14), (13, 13), (12, 12), (11, 11), (14, 13)];
/// AQ, AJ, KQ, KJ, QJ.
const STRONG_BROADWAYS: [(u8, u8); 5] = [(14, 12), (14, 11), (13, 12), (13, 11), (12, 11)];
/// AA, KK, QQ, JJ, AK, AQ, KQ — still a raise without the suit.
const OFFSUIT_RAISES: [(u8, u8); 7] = [
    (14, 14), (13, 13), (12, 12), (11, 11),
    (14, 13), (14, 12), (13, 12),
];
/// 98, T9, JT, QJ, KQ, 87.
const CONNECTORS_BASE: [(u8, u8); 6] =
    [(9, 8), (10, 9), (11, 10), (12, 11), (13, 12), (8, 7)];
/// 76, 97, T8 — added from Intermediate up.
const CONNECTORS_LOOSE_1: [(u8, u8); 3] = [(7, 6), (9, 7), (10, 8)];
/// 65, 86, J9 — added at Advanced.
const CONNECTORS_LOOSE_2: [(u8, u8); 3] = [(6, 5), (8, 6), (11, 9)];

/// The tagged rules, one variant per range family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreflopRule {
    Pair,
    SuitedBroadway,
    OffsuitBroadway,
    SuitedConnector,
    SuitedAce,
    LateSteal,
}

impl PreflopRule {
    /// Fixed precedence; first match wins.
    pub const ORDER: [PreflopRule; 6] = [
        PreflopRule::Pair,
        PreflopRule::SuitedBroadway,
        PreflopRule::OffsuitBroadway,
        PreflopRule::SuitedConnector,
        PreflopRule::SuitedAce,
        PreflopRule::LateSteal,
    ];

    /// Apply this rule alone to the spot. `None` means "no opinion, try
    /// the next rule".
    pub fn evaluate(self, spot: &TrainerSpot) -> Option<TrainerVerdict> {
        match self {
            PreflopRule::Pair            => pair(spot),
            PreflopRule::SuitedBroadway  => suited_broadway(spot),
            PreflopRule::OffsuitBroadway => offsuit_broadway(spot),
            PreflopRule::SuitedConnector => suited_connector(spot),
            PreflopRule::SuitedAce       => suited_ace(spot),
            PreflopRule::LateSteal       => late_steal(spot),
        }
    }
}

/// Recommend an action for an unopened-pot spot.
pub fn classify_spot(spot: &TrainerSpot) -> TrainerVerdict {
    PreflopRule::ORDER
        .iter()
        .find_map(|rule| rule.evaluate(spot))
        .unwrap_or_else(|| default_fold(spot))
}

fn verdict(rule: PreflopRule, action: TrainerAction, rationale: &str) -> TrainerVerdict {
    TrainerVerdict {
        action,
        rationale: rationale.to_string(),
        rule: Some(rule),
    }
}

fn pair(spot: &TrainerSpot) -> Option<TrainerVerdict> {
    if !spot.is_pair() {
        return None;
    }
    let rank = spot.rank1.0;
    if rank >= PAIR_RAISE_CUT[spot.loosen()] {
        return Some(verdict(
            PreflopRule::Pair,
            TrainerAction::Raise,
            "Big and medium pairs play great heads-up. In an unopened pot, raising \
             is the default to build value and take initiative.",
        ));
    }
    if spot.bucket() != PositionBucket::Tight && rank >= PAIR_MID_CUT[spot.loosen()] {
        return Some(verdict(
            PreflopRule::Pair,
            TrainerAction::Raise,
            "Small pairs can be raised past the early seats: the blinds fold often \
             and flopping a set wins big pots.",
        ));
    }
    Some(verdict(
        PreflopRule::Pair,
        TrainerAction::Fold,
        "From early position, tiny pairs are often dominated and you play the whole \
         hand out of position. The simple default is to fold them.",
    ))
}

fn suited_broadway(spot: &TrainerSpot) -> Option<TrainerVerdict> {
    if !spot.suited {
        return None;
    }
    let key = spot.key();
    let high_pair_of_broadways = spot.rank1.0 >= 12 && spot.rank2.0 >= 10;
    if PREMIUMS.contains(&key) || STRONG_BROADWAYS.contains(&key) || high_pair_of_broadways {
        return Some(verdict(
            PreflopRule::SuitedBroadway,
            TrainerAction::Raise,
            "Suited high cards make strong top pairs and can make nut flushes. \
             Raising is the standard default in an unopened pot.",
        ));
    }
    None
}

fn offsuit_broadway(spot: &TrainerSpot) -> Option<TrainerVerdict> {
    if spot.suited {
        return None;
    }
    if OFFSUIT_RAISES.contains(&spot.key()) {
        return Some(verdict(
            PreflopRule::OffsuitBroadway,
            TrainerAction::Raise,
            "Top broadways are strong enough to raise even offsuit. Top pair with \
             a good kicker wins plenty of pots.",
        ));
    }
    None
}

fn suited_connector(spot: &TrainerSpot) -> Option<TrainerVerdict> {
    if !spot.suited {
        return None;
    }
    let key = spot.key();
    let loosen = spot.loosen();
    let in_range = CONNECTORS_BASE.contains(&key)
        || (loosen >= 1 && CONNECTORS_LOOSE_1.contains(&key))
        || (loosen >= 2 && CONNECTORS_LOOSE_2.contains(&key));
    if !in_range {
        return None;
    }
    let v = match spot.bucket() {
        PositionBucket::Late => verdict(
            PreflopRule::SuitedConnector,
            TrainerAction::Raise,
            "In late position, suited connectors steal well and can flop strong \
             draws. A raise is a solid default when folded to you.",
        ),
        PositionBucket::Mid => verdict(
            PreflopRule::SuitedConnector,
            TrainerAction::Call,
            "From middle and out-of-position seats, suited connectors are playable \
             but not mandatory. A simple default is to call more and raise less.",
        ),
        PositionBucket::Tight => verdict(
            PreflopRule::SuitedConnector,
            TrainerAction::Fold,
            "From early position, suited connectors get you into tough spots out \
             of position. The tight default is to fold them.",
        ),
    };
    Some(v)
}

fn suited_ace(spot: &TrainerSpot) -> Option<TrainerVerdict> {
    if !(spot.suited && spot.rank1.0 == 14 && spot.rank2.0 >= 5) {
        return None;
    }
    if spot.bucket() != PositionBucket::Tight {
        return Some(verdict(
            PreflopRule::SuitedAce,
            TrainerAction::Raise,
            "Suited A-x can make the nut flush and blocks one. In middle and late \
             positions, raising it is a good default.",
        ));
    }
    if spot.loosen() >= 2 {
        return Some(verdict(
            PreflopRule::SuitedAce,
            TrainerAction::Call,
            "An advanced default keeps the better suited aces even up front, \
             flatting for their nut-flush potential.",
        ));
    }
    Some(verdict(
        PreflopRule::SuitedAce,
        TrainerAction::Fold,
        "Suited A-x is tempting, but from up front it is easy to get dominated \
         when you make one pair. The tight default is to fold.",
    ))
}

fn late_steal(spot: &TrainerSpot) -> Option<TrainerVerdict> {
    let qualifies = spot.bucket() == PositionBucket::Late
        && spot.suited
        && spot.rank1.0 >= LATE_SUITED_CUT[spot.loosen()];
    if !qualifies {
        return None;
    }
    Some(verdict(
        PreflopRule::LateSteal,
        TrainerAction::Raise,
        "Late position gives you fold equity and the positional advantage. Suited \
         hands with a decent high card can be raised as steals.",
    ))
}

fn default_fold(spot: &TrainerSpot) -> TrainerVerdict {
    TrainerVerdict {
        action: TrainerAction::Fold,
        rationale: format!(
            "Not a pair, strong broadway, suited ace, or good suited connector. \
             The {} default is to fold; tight is fine while learning.",
            spot.level
        ),
        rule: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_flow::models::Rank;
    use crate::preflop_trainer::models::{DifficultyLevel, TrainerPosition};

    fn spot(
        r1: u8,
        r2: u8,
        suited: bool,
        position: TrainerPosition,
        level: DifficultyLevel,
    ) -> TrainerSpot {
        TrainerSpot::new(Rank(r1), Rank(r2), suited, position, level)
    }

    #[test]
    fn aces_raise_through_the_pair_rule() {
        // The pair rule precedes the offsuit-broadway rule.
        let v = classify_spot(&spot(14, 14, false, TrainerPosition::UTG, DifficultyLevel::Beginner));
        assert_eq!(v.action, TrainerAction::Raise);
        assert_eq!(v.rule, Some(PreflopRule::Pair));
    }

    #[test]
    fn seven_deuce_falls_through_to_the_default_fold() {
        let v = classify_spot(&spot(7, 2, false, TrainerPosition::UTG, DifficultyLevel::Beginner));
        assert_eq!(v.action, TrainerAction::Fold);
        assert_eq!(v.rule, None);
        assert!(v.rationale.contains("Beginner"));
    }

    #[test]
    fn suited_connector_raises_late_and_folds_early() {
        let on_button =
            classify_spot(&spot(9, 8, true, TrainerPosition::BTN, DifficultyLevel::Beginner));
        assert_eq!(on_button.action, TrainerAction::Raise);
        assert_eq!(on_button.rule, Some(PreflopRule::SuitedConnector));

        let under_the_gun =
            classify_spot(&spot(9, 8, true, TrainerPosition::UTG, DifficultyLevel::Beginner));
        assert_eq!(under_the_gun.action, TrainerAction::Fold);
        assert_eq!(under_the_gun.rule, Some(PreflopRule::SuitedConnector));
    }

    #[test]
    fn suited_connector_calls_from_the_middle() {
        let v = classify_spot(&spot(10, 9, true, TrainerPosition::HJ, DifficultyLevel::Beginner));
        assert_eq!(v.action, TrainerAction::Call);
    }

    #[test]
    fn pair_thresholds_loosen_with_level() {
        let utg = TrainerPosition::UTG;
        // 77 is below the Beginner cut but meets the Advanced one.
        assert_eq!(
            classify_spot(&spot(7, 7, false, utg, DifficultyLevel::Beginner)).action,
            TrainerAction::Fold
        );
        assert_eq!(
            classify_spot(&spot(7, 7, false, utg, DifficultyLevel::Advanced)).action,
            TrainerAction::Raise
        );
        // 55 is playable past the early seats at Intermediate.
        assert_eq!(
            classify_spot(&spot(5, 5, false, TrainerPosition::HJ, DifficultyLevel::Intermediate)).action,
            TrainerAction::Raise
        );
        assert_eq!(
            classify_spot(&spot(5, 5, false, utg, DifficultyLevel::Intermediate)).action,
            TrainerAction::Fold
        );
    }

    #[test]
    fn connector_range_widens_with_level() {
        let btn = TrainerPosition::BTN;
        // 76s is outside the Beginner range; rule 6 does not rescue a
        // 7-high hand either, so it falls to the default fold.
        let tight = classify_spot(&spot(7, 6, true, btn, DifficultyLevel::Beginner));
        assert_eq!(tight.action, TrainerAction::Fold);
        assert_eq!(tight.rule, None);

        let loose = classify_spot(&spot(7, 6, true, btn, DifficultyLevel::Intermediate));
        assert_eq!(loose.action, TrainerAction::Raise);
        assert_eq!(loose.rule, Some(PreflopRule::SuitedConnector));
    }

    #[test]
    fn suited_ace_depends_on_seat_and_level() {
        let hand = |pos, level| classify_spot(&spot(14, 5, true, pos, level));
        assert_eq!(
            hand(TrainerPosition::CO, DifficultyLevel::Beginner).action,
            TrainerAction::Raise
        );
        assert_eq!(
            hand(TrainerPosition::UTG, DifficultyLevel::Beginner).action,
            TrainerAction::Fold
        );
        assert_eq!(
            hand(TrainerPosition::UTG, DifficultyLevel::Advanced).action,
            TrainerAction::Call
        );
        // A4s misses the rule entirely.
        let v = classify_spot(&spot(14, 4, true, TrainerPosition::UTG, DifficultyLevel::Beginner));
        assert_eq!(v.rule, None);
    }

    #[test]
    fn late_steal_cut_loosens_with_level() {
        let btn = TrainerPosition::BTN;
        // T4s qualifies only through the steal rule.
        let v = classify_spot(&spot(10, 4, true, btn, DifficultyLevel::Beginner));
        assert_eq!(v.action, TrainerAction::Raise);
        assert_eq!(v.rule, Some(PreflopRule::LateSteal));

        assert_eq!(
            classify_spot(&spot(9, 4, true, btn, DifficultyLevel::Beginner)).rule,
            None
        );
        assert_eq!(
            classify_spot(&spot(9, 4, true, btn, DifficultyLevel::Intermediate)).rule,
            Some(PreflopRule::LateSteal)
        );
    }

    #[test]
    fn classification_is_pure() {
        let s = spot(12, 11, true, TrainerPosition::SB, DifficultyLevel::Intermediate);
        let first = classify_spot(&s);
        for _ in 0..50 {
            assert_eq!(classify_spot(&s), first);
        }
    }

    #[test]
    fn canonicalization_reorders_ranks() {
        let low_first = classify_spot(&spot(8, 9, true, TrainerPosition::BTN, DifficultyLevel::Beginner));
        let high_first = classify_spot(&spot(9, 8, true, TrainerPosition::BTN, DifficultyLevel::Beginner));
        assert_eq!(low_first, high_first);
    }
}

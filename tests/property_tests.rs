//! Property tests over arbitrary capture piles.
//!
//! Piles are drawn as subsequences of the real deck, so every generated
//! collection is one a match could actually produce.

use proptest::prelude::*;
use proptest::sample::subsequence;

use hanafuda_advisor::cards::{deck, Card, CardKind};
use hanafuda_advisor::core::RuleVariant;
use hanafuda_advisor::rules::{detect, progress, score, Yaku};
use hanafuda_advisor::strategy::rank_moves;

fn pile() -> impl Strategy<Value = Vec<Card>> {
    subsequence(deck().to_vec(), 0..=deck().len())
}

fn variant() -> impl Strategy<Value = RuleVariant> {
    prop_oneof![Just(RuleVariant::Holo), Just(RuleVariant::Classic)]
}

proptest! {
    #[test]
    fn score_is_sum_of_detect(cards in pile(), variant in variant()) {
        let scores = detect(&cards, variant, None);
        let sum: u32 = scores.iter().map(|(_, p)| p).sum();
        prop_assert_eq!(score(&cards, variant, None), sum);
    }

    #[test]
    fn detected_yaku_are_never_zero(cards in pile(), variant in variant()) {
        for (yaku, points) in detect(&cards, variant, None).iter() {
            prop_assert!(points > 0, "{} scored zero", yaku);
        }
    }

    #[test]
    fn ribbon_sets_are_exclusive(cards in pile()) {
        let scores = detect(&cards, RuleVariant::Holo, None);
        if scores.contains(Yaku::AkatanAotan) {
            prop_assert!(!scores.contains(Yaku::Akatan));
            prop_assert!(!scores.contains(Yaku::Aotan));
        }
    }

    #[test]
    fn at_most_one_bright_yaku(cards in pile()) {
        let scores = detect(&cards, RuleVariant::Holo, None);
        let brights = [Yaku::Gokou, Yaku::Shiko, Yaku::AmeShiko, Yaku::Sanko]
            .iter()
            .filter(|y| scores.contains(**y))
            .count();
        prop_assert!(brights <= 1);
    }

    #[test]
    fn input_order_does_not_matter(cards in pile(), variant in variant()) {
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(detect(&cards, variant, None), detect(&reversed, variant, None));
    }

    #[test]
    fn calls_are_idempotent(cards in pile(), variant in variant()) {
        prop_assert_eq!(detect(&cards, variant, None), detect(&cards, variant, None));
        prop_assert_eq!(progress(&cards, variant), progress(&cards, variant));

        let (hand, field) = cards.split_at(cards.len() / 2);
        prop_assert_eq!(rank_moves(hand, field, &[], &[]), rank_moves(hand, field, &[], &[]));
    }

    #[test]
    fn graduated_yaku_gain_one_per_card(cards in pile()) {
        // Duplicating an existing qualifying card keeps every other count fixed
        let scores = detect(&cards, RuleVariant::Classic, None);

        let graduated = [
            (Yaku::Tane, CardKind::Animal),
            (Yaku::Tan, CardKind::Ribbon),
            (Yaku::Kasu, CardKind::Kasu),
        ];
        for (yaku, kind) in graduated {
            if let (Some(points), Some(extra)) =
                (scores.get(yaku), cards.iter().find(|c| c.kind() == kind))
            {
                let mut more = cards.clone();
                more.push(*extra);
                prop_assert_eq!(detect(&more, RuleVariant::Classic, None).get(yaku), Some(points + 1));
            }
        }
    }

    #[test]
    fn ranked_moves_are_sorted_and_bounded(cards in pile()) {
        let (hand, rest) = cards.split_at(cards.len().min(8));
        let (field, captured) = rest.split_at(rest.len().min(8));

        let moves = rank_moves(hand, field, captured, &[]);
        prop_assert!(moves.len() <= 5);
        for pair in moves.windows(2) {
            prop_assert!(pair[0].score_delta >= pair[1].score_delta);
        }
        for m in &moves {
            if let Some(capture) = m.capture {
                prop_assert!(capture.same_month(&m.play));
            }
        }
    }
}

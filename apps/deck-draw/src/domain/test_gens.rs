// Proptest generators for provider-shaped cards.

use proptest::prelude::*;

use crate::domain::{Card, Rank, ALL_RANKS};

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(ALL_RANKS.to_vec())
}

/// Generate a provider suit label
pub fn suit_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("CLUBS".to_string()),
        Just("DIAMONDS".to_string()),
        Just("HEARTS".to_string()),
        Just("SPADES".to_string()),
    ]
}

/// Generate a card whose value is a recognised rank label
pub fn ranked_card() -> impl Strategy<Value = Card> {
    (rank(), suit_label()).prop_map(|(rank, suit)| Card::new(rank.label(), suit))
}

/// Generate a card whose value is outside the rank order
pub fn unranked_card() -> impl Strategy<Value = Card> {
    (
        prop_oneof![
            Just("JOKER".to_string()),
            Just("ace".to_string()),
            Just("1".to_string()),
            Just("T".to_string()),
            "[a-z]{1,6}",
        ],
        suit_label(),
    )
        .prop_map(|(value, suit)| Card::new(value, suit))
}

/// Generate a hand of recognised cards (duplicates allowed; the provider
/// may serve multi-deck shoes)
pub fn ranked_cards() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(ranked_card(), 0..20)
}

/// Generate a mix of recognised and unrecognised cards
pub fn mixed_cards() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(prop_oneof![3 => ranked_card(), 1 => unranked_card()], 0..20)
}

use proptest::prelude::*;

use crate::domain::{sort_for_display, test_gens, test_prelude, Card, Rank, ALL_RANKS};

#[test]
fn rank_ordinals_strictly_increase() {
    let ordinals: Vec<u8> = ALL_RANKS.iter().map(|r| r.ordinal()).collect();
    assert_eq!(ordinals, (1..=13).collect::<Vec<u8>>());
    assert_eq!(Rank::Ace.ordinal(), 1);
    assert_eq!(Rank::King.ordinal(), 13);
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: output ordinals never decrease
    #[test]
    fn prop_sorted_output_is_non_decreasing(cards in test_gens::mixed_cards()) {
        let sorted = sort_for_display(&cards);
        let ordinals: Vec<u8> = sorted
            .iter()
            .map(|c| c.rank().map(Rank::ordinal))
            .collect::<Option<Vec<_>>>()
            .expect("sorted output must only contain ranked cards");
        prop_assert!(ordinals.windows(2).all(|w| w[0] <= w[1]),
            "ordinals out of order: {:?}", ordinals);
    }

    /// Property: unrecognised cards vanish and do not disturb the rest
    #[test]
    fn prop_unranked_cards_are_dropped(cards in test_gens::mixed_cards()) {
        let ranked_only: Vec<Card> = cards.iter().filter(|c| c.rank().is_some()).cloned().collect();

        let from_mixed: Vec<&Card> = sort_for_display(&cards);
        let from_ranked: Vec<&Card> = sort_for_display(&ranked_only);

        prop_assert_eq!(from_mixed.len(), ranked_only.len());
        prop_assert_eq!(from_mixed, from_ranked);
    }

    /// Property: sorting is idempotent
    #[test]
    fn prop_sorting_sorted_input_is_identity(cards in test_gens::ranked_cards()) {
        let once: Vec<Card> = sort_for_display(&cards).into_iter().cloned().collect();
        let twice: Vec<Card> = sort_for_display(&once).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    /// Property: equal-rank cards keep their relative input order
    #[test]
    fn prop_sort_is_stable(cards in test_gens::ranked_cards()) {
        // Tag each card with its input position through the suit field.
        let tagged: Vec<Card> = cards
            .iter()
            .enumerate()
            .map(|(i, c)| Card::new(c.value.clone(), format!("{}#{i:02}", c.suit)))
            .collect();
        let sorted = sort_for_display(&tagged);
        for pair in sorted.windows(2) {
            if pair[0].rank() == pair[1].rank() {
                let pos = |c: &Card| c.suit.rsplit('#').next().map(str::to_owned);
                prop_assert!(pos(pair[0]) < pos(pair[1]),
                    "equal ranks reordered: {} before {}", pair[0], pair[1]);
            }
        }
    }

    /// Property: a multiset permutation of the ranked input
    #[test]
    fn prop_sorting_keeps_every_ranked_card(cards in test_gens::ranked_cards()) {
        let mut expected: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
        let mut actual: Vec<String> = sort_for_display(&cards).iter().map(|c| c.to_string()).collect();
        expected.sort();
        actual.sort();
        prop_assert_eq!(expected, actual);
    }
}

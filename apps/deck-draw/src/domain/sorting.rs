//! Display ordering for drawn cards.

use super::cards_types::Card;

/// Order cards for display: ascending by rank ordinal, dropping cards whose
/// rank label is not recognised.
///
/// The sort is stable and keyed on the ordinal only, so cards of equal rank
/// keep the order the provider returned them in.
pub fn sort_for_display(cards: &[Card]) -> Vec<&Card> {
    let mut ranked: Vec<(u8, &Card)> = cards
        .iter()
        .filter_map(|card| card.rank().map(|rank| (rank.ordinal(), card)))
        .collect();
    ranked.sort_by_key(|(ordinal, _)| *ordinal);
    ranked.into_iter().map(|(_, card)| card).collect()
}

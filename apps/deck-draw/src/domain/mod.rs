//! Domain layer: card types, rank order and display sorting.

pub mod cards_parsing;
pub mod cards_types;
pub mod sorting;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_sorting;

// Re-exports for ergonomics
pub use cards_types::{Card, DeckHandle, Rank, ALL_RANKS};
pub use sorting::sort_for_display;

//! Core card-related types: Card, Rank, DeckHandle

use std::fmt;

/// Rank labels in display order. Declaration order is the sort order:
/// aces are low, kings are high.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// Position in the rank order, ACE=1 through KING=13.
    pub fn ordinal(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
        }
    }
}

/// A card exactly as the provider described it.
///
/// `value` and `suit` keep the provider's literal strings because they are
/// echoed back verbatim on output. The rank is derived on demand via
/// [`Card::rank`] and is `None` for labels outside the rank order.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub value: String,
    pub suit: String,
    pub code: Option<String>,
}

impl Card {
    pub fn new(value: impl Into<String>, suit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            suit: suit.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn rank(&self) -> Option<Rank> {
        Rank::from_label(&self.value)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}

/// Opaque deck identifier issued by the provider on shuffle.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct DeckHandle(String);

impl DeckHandle {
    /// Wrap a provider-issued id. Blank ids are not usable handles.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Rank parsing from the provider's label strings (e.g., "ACE", "10", "KING")

use std::str::FromStr;

use super::cards_types::Rank;

impl Rank {
    /// Look up a provider rank label. Labels are matched exactly; the
    /// provider always sends upper-case words and bare digits.
    pub fn from_label(label: &str) -> Option<Rank> {
        let rank = match label {
            "ACE" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "JACK" => Rank::Jack,
            "QUEEN" => Rank::Queen,
            "KING" => Rank::King,
            _ => return None,
        };
        Some(rank)
    }

    /// The provider's label for this rank.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "ACE",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
        }
    }
}

impl FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::from_label(s).ok_or_else(|| format!("Invalid rank: {s}"))
    }
}

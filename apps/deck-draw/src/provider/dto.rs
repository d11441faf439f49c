//! Wire shapes of the deck service's JSON responses.

use serde::Deserialize;

use crate::domain::{Card, DeckHandle};
use crate::error::{AppError, ProviderErrorKind};

/// Body of `GET /api/deck/new/shuffle/`.
#[derive(Debug, Deserialize)]
pub struct ShuffleResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub deck_id: Option<String>,
    pub remaining: Option<u32>,
    pub shuffled: Option<bool>,
    pub error: Option<String>,
}

/// Body of `GET /api/deck/{deck_id}/draw/`.
#[derive(Debug, Deserialize)]
pub struct DrawResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub cards: Option<Vec<CardDto>>,
    pub remaining: Option<u32>,
    pub error: Option<String>,
}

/// Whatever the provider sends alongside a non-2xx status.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CardDto {
    pub value: String,
    pub suit: String,
    pub code: Option<String>,
}

// Absent `success` means the provider did not flag a failure.
fn default_success() -> bool {
    true
}

fn rejected(error: Option<String>) -> AppError {
    let detail = error.unwrap_or_else(|| "provider reported failure".to_string());
    AppError::provider(ProviderErrorKind::Rejected, detail)
}

impl From<CardDto> for Card {
    fn from(dto: CardDto) -> Self {
        Card {
            value: dto.value,
            suit: dto.suit,
            code: dto.code,
        }
    }
}

impl ShuffleResponse {
    /// Extract the deck handle, treating `success: false` and a missing or
    /// blank `deck_id` as provider failures.
    pub fn into_handle(self) -> Result<DeckHandle, AppError> {
        if !self.success {
            return Err(rejected(self.error));
        }
        self.deck_id.and_then(DeckHandle::new).ok_or_else(|| {
            AppError::provider(
                ProviderErrorKind::Malformed,
                "shuffle response is missing deck_id",
            )
        })
    }
}

impl DrawResponse {
    /// Extract the drawn cards, treating `success: false` and a missing
    /// `cards` array as provider failures.
    pub fn into_cards(self) -> Result<Vec<Card>, AppError> {
        if !self.success {
            return Err(rejected(self.error));
        }
        let cards = self.cards.ok_or_else(|| {
            AppError::provider(
                ProviderErrorKind::Malformed,
                "draw response is missing cards",
            )
        })?;
        Ok(cards.into_iter().map(Card::from).collect())
    }
}

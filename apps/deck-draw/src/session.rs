//! Card session: shuffle, draw, print.
//!
//! A session owns one provider, one output sink and at most one deck handle.
//! Each step reports its own failure on the output sink and then returns the
//! error, so the caller decides whether to keep going (the binary does not).

use std::io::Write;
use std::num::NonZeroU32;
use std::process::ExitCode;

use tracing::{debug, info};

use crate::domain::{Card, DeckHandle};
use crate::error::AppError;
use crate::provider::CardProvider;
use crate::render;

pub const DEFAULT_CARD_COUNT: NonZeroU32 = match NonZeroU32::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Cards the provider handed back
    pub drawn: usize,
    /// Card lines printed (unrecognised ranks are not printed)
    pub rendered: usize,
}

/// Process exit status for a finished run.
///
/// A failed run has already printed its failure line and still exits 0,
/// unless `strict` asks for a non-zero status.
pub fn exit_code(result: &Result<RunSummary, AppError>, strict: bool) -> ExitCode {
    match result {
        Err(_) if strict => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

pub struct CardSession<P, W> {
    provider: P,
    out: W,
    card_count: NonZeroU32,
    deck: Option<DeckHandle>,
}

impl<P: CardProvider, W: Write> CardSession<P, W> {
    pub fn new(provider: P, card_count: NonZeroU32, out: W) -> Self {
        Self {
            provider,
            out,
            card_count,
            deck: None,
        }
    }

    /// Handle of the acquired deck, if any
    pub fn deck(&self) -> Option<&DeckHandle> {
        self.deck.as_ref()
    }

    pub fn card_count(&self) -> NonZeroU32 {
        self.card_count
    }

    /// Give back the output sink, e.g. to inspect a buffer in tests
    pub fn into_output(self) -> W {
        self.out
    }

    /// Shuffle a new single deck and remember its handle.
    ///
    /// On failure the handle stays unset and `Error shuffling cards: ...` is
    /// printed before the error is returned.
    pub async fn acquire_deck(&mut self) -> Result<DeckHandle, AppError> {
        match self.provider.shuffle().await {
            Ok(handle) => {
                info!(deck_id = %handle, "deck acquired");
                self.deck = Some(handle.clone());
                Ok(handle)
            }
            Err(e) => {
                info!(error = %e, kind = ?e.provider_kind(), "shuffle failed");
                writeln!(self.out, "{}", render::shuffle_failed(&e))?;
                Err(e)
            }
        }
    }

    /// Draw `count` cards from the acquired deck, in provider order.
    ///
    /// Without a deck this prints the "Deck ID not found" notice and returns
    /// a precondition error without contacting the provider.
    pub async fn draw_cards(&mut self, count: NonZeroU32) -> Result<Vec<Card>, AppError> {
        let Some(deck) = self.deck.as_ref() else {
            info!("draw attempted before a deck was acquired");
            writeln!(self.out, "{}", render::NO_DECK)?;
            return Err(AppError::precondition("no deck acquired"));
        };

        match self.provider.draw(deck, count).await {
            Ok(cards) => {
                info!(deck_id = %deck, drawn = cards.len(), "cards drawn");
                Ok(cards)
            }
            Err(e) => {
                info!(deck_id = %deck, error = %e, kind = ?e.provider_kind(), "draw failed");
                writeln!(self.out, "{}", render::draw_failed(&e))?;
                Err(e)
            }
        }
    }

    /// Print `cards` sorted by rank. Returns the number of card lines printed.
    pub fn render_sorted(&mut self, cards: &[Card]) -> Result<usize, AppError> {
        let rendered = render::render_sorted(cards, &mut self.out)?;
        if rendered < cards.len() {
            debug!(
                dropped = cards.len() - rendered,
                "cards with unrecognised ranks were not displayed"
            );
        }
        Ok(rendered)
    }

    /// Shuffle, draw the configured number of cards and print them.
    ///
    /// Stops at the first failure; nothing is printed for cards when the draw
    /// fails or comes back empty.
    pub async fn run(mut self) -> Result<RunSummary, AppError> {
        self.acquire_deck().await?;

        let cards = self.draw_cards(self.card_count).await?;
        if cards.is_empty() {
            debug!("provider returned no cards; nothing to render");
            self.out.flush()?;
            return Ok(RunSummary {
                drawn: 0,
                rendered: 0,
            });
        }

        let rendered = self.render_sorted(&cards)?;
        Ok(RunSummary {
            drawn: cards.len(),
            rendered,
        })
    }
}

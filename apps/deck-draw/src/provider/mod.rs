//! Card provider seam.
//!
//! The session only talks to the remote deck service through [`CardProvider`],
//! so tests can swap in a scripted provider and the HTTP details stay in
//! [`http`].

pub mod dto;
pub mod http;

use std::num::NonZeroU32;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Card, DeckHandle};
use crate::error::AppError;

pub use http::HttpCardProvider;

/// Trait for remote card providers.
///
/// Implementations map every failure (transport, status, body shape) into
/// [`AppError::Provider`]; they never print anything themselves.
#[async_trait]
pub trait CardProvider: Send + Sync {
    /// Shuffle a fresh single deck and return its handle.
    async fn shuffle(&self) -> Result<DeckHandle, AppError>;

    /// Draw `count` cards from the deck identified by `deck`.
    ///
    /// Cards come back in the order the provider dealt them.
    async fn draw(&self, deck: &DeckHandle, count: NonZeroU32) -> Result<Vec<Card>, AppError>;
}

#[async_trait]
impl<P: CardProvider + ?Sized> CardProvider for Arc<P> {
    async fn shuffle(&self) -> Result<DeckHandle, AppError> {
        (**self).shuffle().await
    }

    async fn draw(&self, deck: &DeckHandle, count: NonZeroU32) -> Result<Vec<Card>, AppError> {
        (**self).draw(deck, count).await
    }
}

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod provider;
pub mod render;
pub mod session;

// Re-exports for public API
pub use config::provider::ProviderConfig;
pub use domain::{Card, DeckHandle, Rank};
pub use error::{AppError, ProviderErrorKind};
pub use provider::{CardProvider, HttpCardProvider};
pub use session::{exit_code, CardSession, RunSummary, DEFAULT_CARD_COUNT};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    deck_test_support::logging::init();
}

#![allow(dead_code)]

// tests/common/mod.rs
use std::num::NonZeroU32;
use std::sync::Mutex;

use async_trait::async_trait;
use deck_draw::{AppError, Card, CardProvider, CardSession, DeckHandle, RunSummary};

// Logging is auto-installed for every test binary that pulls in `common`
#[ctor::ctor]
fn init_logging() {
    deck_test_support::logging::init();
}

/// Provider with one scripted answer per call that records what it was asked.
///
/// Each answer can be consumed once; a second shuffle or draw panics, which
/// is how tests catch unexpected extra calls.
pub struct ScriptedProvider {
    shuffle: Mutex<Option<Result<DeckHandle, AppError>>>,
    draw: Mutex<Option<Result<Vec<Card>, AppError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            shuffle: Mutex::new(Some(Ok(DeckHandle::new("abc123").unwrap()))),
            draw: Mutex::new(Some(Ok(Vec::new()))),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn shuffle_err(self, err: AppError) -> Self {
        *self.shuffle.lock().unwrap() = Some(Err(err));
        self
    }

    pub fn draw_ok(self, cards: Vec<Card>) -> Self {
        *self.draw.lock().unwrap() = Some(Ok(cards));
        self
    }

    pub fn draw_err(self, err: AppError) -> Self {
        *self.draw.lock().unwrap() = Some(Err(err));
        self
    }

    /// Calls in order, as "shuffle" or "draw <deck_id> <count>"
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CardProvider for ScriptedProvider {
    async fn shuffle(&self) -> Result<DeckHandle, AppError> {
        self.calls.lock().unwrap().push("shuffle".to_string());
        self.shuffle
            .lock()
            .unwrap()
            .take()
            .expect("shuffle called more than once")
    }

    async fn draw(&self, deck: &DeckHandle, count: NonZeroU32) -> Result<Vec<Card>, AppError> {
        self.calls.lock().unwrap().push(format!("draw {deck} {count}"));
        self.draw
            .lock()
            .unwrap()
            .take()
            .expect("draw called more than once")
    }
}

/// Run a full session against `provider` and capture what it printed.
pub async fn run_captured<P: CardProvider>(
    provider: P,
    count: u32,
) -> (Result<RunSummary, AppError>, String) {
    let mut out = Vec::new();
    let count = NonZeroU32::new(count).expect("count must be positive");
    let result = CardSession::new(provider, count, &mut out).run().await;
    (result, String::from_utf8(out).expect("output is utf-8"))
}

/// The three cards from the reference scenario, in provider order
pub fn reference_cards() -> Vec<Card> {
    vec![
        Card::new("KING", "HEARTS"),
        Card::new("2", "SPADES"),
        Card::new("ACE", "CLUBS"),
    ]
}

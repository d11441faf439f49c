//! Deck-draw test support utilities
//!
//! This crate provides utilities shared by the integration tests: unified
//! logging initialization and a stub deck service that speaks the same HTTP
//! routes as the public API.

pub mod logging;
pub mod stub_api;

pub use stub_api::{RecordedRequest, StubDeckApi, StubReply};

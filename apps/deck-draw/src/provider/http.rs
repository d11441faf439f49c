//! Deck service client over HTTP.

use std::num::NonZeroU32;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{DrawResponse, ErrorBody, ShuffleResponse};
use super::CardProvider;
use crate::config::provider::ProviderConfig;
use crate::domain::{Card, DeckHandle};
use crate::error::{AppError, ProviderErrorKind};

const USER_AGENT: &str = concat!("deck-draw/", env!("CARGO_PKG_VERSION"));

/// Only single-deck shoes are ever requested.
const DECK_COUNT: u32 = 1;

/// [`CardProvider`] backed by the public deck service's REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpCardProvider {
    client: Client,
    base_url: Url,
}

impl HttpCardProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Use a preconfigured client, e.g. one shared with other callers
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base URL, keeping the trailing slash the
    /// service expects (`/api/deck/new/shuffle/`).
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config(format!("Base URL cannot be a base: '{}'", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }

    /// GET the URL, require a 2xx status and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        debug!(url = %url, ?query, "deck service request");

        let resp = self.client.get(url).query(query).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let url = resp.url().clone();
            // The service usually explains itself in an `error` field.
            let provider_error = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error);
            debug!(
                status = status.as_u16(),
                url = %url,
                provider_error = ?provider_error,
                "deck service returned non-success status"
            );
            let mut detail = format!("HTTP status {status} for url ({url})");
            if let Some(provider_error) = provider_error {
                detail.push_str(": ");
                detail.push_str(&provider_error);
            }
            return Err(AppError::provider(
                ProviderErrorKind::Status(status.as_u16()),
                detail,
            ));
        }

        Ok(resp.json::<T>().await?)
    }
}

#[async_trait]
impl CardProvider for HttpCardProvider {
    async fn shuffle(&self) -> Result<DeckHandle, AppError> {
        let url = self.endpoint(&["api", "deck", "new", "shuffle"])?;
        let resp: ShuffleResponse = self
            .get_json(url, &[("deck_count", DECK_COUNT.to_string())])
            .await?;
        let remaining = resp.remaining;
        let shuffled = resp.shuffled;
        let handle = resp.into_handle()?;

        debug!(deck_id = %handle, ?remaining, ?shuffled, "deck shuffled");
        Ok(handle)
    }

    async fn draw(&self, deck: &DeckHandle, count: NonZeroU32) -> Result<Vec<Card>, AppError> {
        let url = self.endpoint(&["api", "deck", deck.as_str(), "draw"])?;
        let resp: DrawResponse = self
            .get_json(url, &[("count", count.to_string())])
            .await?;
        let remaining = resp.remaining;
        let cards = resp.into_cards()?;

        debug!(
            deck_id = %deck,
            requested = count.get(),
            drawn = cards.len(),
            ?remaining,
            "cards drawn"
        );
        if cards.len() != count.get() as usize {
            warn!(
                deck_id = %deck,
                requested = count.get(),
                drawn = cards.len(),
                "deck service returned a different number of cards than requested"
            );
        }
        Ok(cards)
    }
}

//! HTTP implementation of the game-data loader.

use async_trait::async_trait;

use crate::endpoints::{EndpointTable, HotelEndpoint};
use crate::error::LoadError;

use super::loader::GameDataLoader;
use super::model::{ExternalTexts, FurniData};

/// Fetches game-definition datasets from the hotel's web services, building
/// its requests from the endpoint table.
pub struct HttpGameDataLoader {
    client: reqwest::Client,
}

impl HttpGameDataLoader {
    /// Create a loader with a fresh HTTP client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_body(&self, table: &EndpointTable, endpoint: HotelEndpoint) -> Result<String, LoadError> {
        let uri = table.uri(endpoint).clone();
        tracing::debug!("fetching {} from {}", endpoint, uri);

        let body = self
            .client
            .get(uri)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body)
    }
}

impl Default for HttpGameDataLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameDataLoader for HttpGameDataLoader {
    async fn load_furni(&self, table: &EndpointTable) -> Result<FurniData, LoadError> {
        let body = self.fetch_body(table, HotelEndpoint::FurniData).await?;
        FurniData::from_json(&body)
    }

    async fn load_texts(&self, table: &EndpointTable) -> Result<ExternalTexts, LoadError> {
        let body = self.fetch_body(table, HotelEndpoint::ExternalTexts).await?;
        Ok(ExternalTexts::from_text(&body))
    }
}

//! Loader trait for game-definition datasets.
//!
//! The synchronization coordinator depends on this trait, not on a concrete
//! transport, so tests can drive it with stub loaders and the HTTP
//! implementation stays swappable.

use async_trait::async_trait;

use crate::endpoints::EndpointTable;
use crate::error::LoadError;

use super::model::{ExternalTexts, FurniData};

#[cfg(test)]
use mockall::automock;

/// Loads game-definition datasets for the domain an endpoint table was
/// built for.
///
/// Each dataset is loaded independently and may complete in any order.
/// Cancellation is driven by the caller aborting the task the load runs on;
/// implementations only need to keep their suspension points honest.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GameDataLoader: Send + Sync {
    /// Load the furniture definition dataset
    async fn load_furni(&self, table: &EndpointTable) -> Result<FurniData, LoadError>;

    /// Load the localized text dataset
    async fn load_texts(&self, table: &EndpointTable) -> Result<ExternalTexts, LoadError>;
}

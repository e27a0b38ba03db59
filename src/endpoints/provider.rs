//! Shared access to the currently active endpoint table.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::WebConfig;
use crate::error::ConfigError;

use super::EndpointTable;

/// Owns the active [`EndpointTable`] and rebuilds it per domain.
///
/// Construction validates the configuration by building a table for the
/// configured default domain, so structural configuration defects surface at
/// startup rather than on the first session connection. Rebuilds swap in a
/// wholly new table atomically: readers always observe a fully-built table,
/// and a failed rebuild leaves the previous table in effect.
pub struct EndpointProvider {
    config: WebConfig,
    table: RwLock<Arc<EndpointTable>>,
}

impl EndpointProvider {
    /// Create a provider, validating the configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Web configuration holding the default domain and groups
    ///
    /// # Returns
    ///
    /// * `Ok(EndpointProvider)` - Configuration validated, initial table built
    /// * `Err(ConfigError)` - Configuration is structurally defective
    pub fn new(config: WebConfig) -> Result<Self, ConfigError> {
        let table = EndpointTable::build(&config.endpoints, &config.domain)?;
        Ok(Self {
            config,
            table: RwLock::new(Arc::new(table)),
        })
    }

    /// Rebuild the table for a new domain and swap it in atomically.
    ///
    /// On failure the previously active table remains authoritative.
    pub async fn rebuild(&self, domain: &str) -> Result<Arc<EndpointTable>, ConfigError> {
        let table = Arc::new(EndpointTable::build(&self.config.endpoints, domain)?);
        *self.table.write().await = Arc::clone(&table);
        tracing::info!("endpoint table rebuilt for domain '{}'", domain);
        Ok(table)
    }

    /// The currently active table
    pub async fn table(&self) -> Arc<EndpointTable> {
        Arc::clone(&*self.table.read().await)
    }

    /// The domain the currently active table was built for
    pub async fn domain(&self) -> String {
        self.table.read().await.domain().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::HotelEndpoint;

    fn test_config() -> WebConfig {
        WebConfig::from_json(
            r#"{
                "domain": "habbo.com",
                "endpoints": [
                    {
                        "host": "https://www.$domain/",
                        "paths": { "Catalog": "/client/catalog" }
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_new_validates_configuration() {
        // テスト項目: 不正なエンドポイント名を含む設定では構築に失敗する
        // given (前提条件):
        let config = WebConfig::from_json(
            r#"{
                "domain": "habbo.com",
                "endpoints": [
                    { "host": "https://www.$domain/", "paths": { "Catalgo": "/typo" } }
                ]
            }"#,
        )
        .unwrap();

        // when (操作):
        let result = EndpointProvider::new(config);

        // then (期待する結果):
        assert!(matches!(result, Err(ConfigError::UnknownEndpoint(name)) if name == "Catalgo"));
    }

    #[tokio::test]
    async fn test_initial_table_uses_default_domain() {
        // テスト項目: 構築直後のテーブルは設定のデフォルトドメインで解決されている
        // given (前提条件):
        let provider = EndpointProvider::new(test_config()).unwrap();

        // when (操作):
        let table = provider.table().await;

        // then (期待する結果):
        assert_eq!(table.domain(), "habbo.com");
        assert_eq!(
            table[HotelEndpoint::Catalog].as_str(),
            "https://www.habbo.com/client/catalog"
        );
    }

    #[tokio::test]
    async fn test_rebuild_swaps_in_new_table() {
        // テスト項目: rebuild 成功後、新しいドメインのテーブルが読めるようになる
        // given (前提条件):
        let provider = EndpointProvider::new(test_config()).unwrap();

        // when (操作):
        provider.rebuild("habbo.de").await.unwrap();

        // then (期待する結果):
        let table = provider.table().await;
        assert_eq!(table.domain(), "habbo.de");
        assert_eq!(
            table[HotelEndpoint::Catalog].as_str(),
            "https://www.habbo.de/client/catalog"
        );
    }

    #[tokio::test]
    async fn test_old_table_remains_readable_after_rebuild() {
        // テスト項目: rebuild 前に取得した Arc は rebuild 後も元の内容のまま
        // given (前提条件):
        let provider = EndpointProvider::new(test_config()).unwrap();
        let old_table = provider.table().await;

        // when (操作):
        provider.rebuild("habbo.fr").await.unwrap();

        // then (期待する結果):
        assert_eq!(old_table.domain(), "habbo.com");
        assert_eq!(provider.table().await.domain(), "habbo.fr");
    }
}

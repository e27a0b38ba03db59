//! Web-service configuration for the hotel.
//!
//! The configuration describes where the hotel's web services live: a default
//! domain and a list of endpoint groups. Each group carries a host template
//! (with a `$domain` placeholder for the active domain) and a mapping of
//! endpoint name to relative path. It is read once at startup; the endpoint
//! table is rebuilt from it every time the interceptor attaches to a new
//! session.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Placeholder token inside host templates that stands for the active domain
pub const DOMAIN_PLACEHOLDER: &str = "$domain";

/// Top-level web configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Default web domain used until a session connection overrides it
    pub domain: String,
    /// Endpoint groups, each rooted at one host template
    pub endpoints: Vec<EndpointGroup>,
}

/// One group of endpoints sharing a host template
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointGroup {
    /// Host template, e.g. `https://www.$domain/`
    pub host: String,
    /// Endpoint name -> relative path, e.g. `"Catalog": "/client/catalog"`
    ///
    /// BTreeMap keeps iteration order deterministic so that identical
    /// configuration always builds identical tables.
    pub paths: BTreeMap<String, String>,
}

impl WebConfig {
    /// Parse web configuration from a JSON string.
    ///
    /// # Arguments
    ///
    /// * `json` - The configuration document
    ///
    /// # Returns
    ///
    /// * `Ok(WebConfig)` - The parsed configuration
    /// * `Err(ConfigError)` - The document is not valid configuration JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse web configuration from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_with_valid_config() {
        // テスト項目: 正しい JSON 設定が WebConfig にパースされる
        // given (前提条件):
        let json = r#"{
            "domain": "habbo.com",
            "endpoints": [
                {
                    "host": "https://www.$domain/",
                    "paths": {
                        "Catalog": "/client/catalog",
                        "Help": "/help"
                    }
                }
            ]
        }"#;

        // when (操作):
        let config = WebConfig::from_json(json).unwrap();

        // then (期待する結果):
        assert_eq!(config.domain, "habbo.com");
        assert_eq!(config.endpoints.len(), 1);
        assert_eq!(config.endpoints[0].host, "https://www.$domain/");
        assert_eq!(
            config.endpoints[0].paths.get("Catalog").map(String::as_str),
            Some("/client/catalog")
        );
    }

    #[test]
    fn test_from_json_with_invalid_json() {
        // テスト項目: 不正な JSON の場合、ConfigError::Parse が返される
        // given (前提条件):
        let json = "{ not valid json";

        // when (操作):
        let result = WebConfig::from_json(json);

        // then (期待する結果):
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_json_with_missing_domain() {
        // テスト項目: domain フィールドが欠けている場合、パースに失敗する
        // given (前提条件):
        let json = r#"{ "endpoints": [] }"#;

        // when (操作):
        let result = WebConfig::from_json(json);

        // then (期待する結果):
        assert!(result.is_err());
    }
}

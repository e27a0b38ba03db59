//! Immutable endpoint table built from configuration and a domain.

use std::collections::HashMap;
use std::ops::Index;

use url::Url;

use crate::config::{DOMAIN_PLACEHOLDER, EndpointGroup};
use crate::error::{ConfigError, EndpointError};

use super::HotelEndpoint;

/// An immutable mapping from [`HotelEndpoint`] to a fully-resolved URI.
///
/// A table is built atomically for one domain: either every configured
/// endpoint name validates against the closed set and resolves, or the whole
/// build fails and no table is produced. Rebuilds for a new domain produce a
/// wholly new table; a table is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTable {
    domain: String,
    uris: HashMap<HotelEndpoint, Url>,
}

impl EndpointTable {
    /// Build an endpoint table for the given domain.
    ///
    /// For each group the `$domain` placeholder in the host template is
    /// substituted with `domain`, and every relative path in the group is
    /// resolved against the resulting base URL.
    ///
    /// # Arguments
    ///
    /// * `groups` - Endpoint groups from configuration
    /// * `domain` - The active web domain, e.g. `habbo.com`
    ///
    /// # Returns
    ///
    /// * `Ok(EndpointTable)` - Every configured name validated and resolved
    /// * `Err(ConfigError)` - An unknown endpoint name or unresolvable URL;
    ///   no table is produced
    pub fn build(groups: &[EndpointGroup], domain: &str) -> Result<Self, ConfigError> {
        let mut uris = HashMap::new();

        for group in groups {
            let host = group.host.replace(DOMAIN_PLACEHOLDER, domain);
            let base = Url::parse(&host).map_err(|source| ConfigError::InvalidHostTemplate {
                template: group.host.clone(),
                source,
            })?;

            for (name, path) in &group.paths {
                let endpoint = name
                    .parse::<HotelEndpoint>()
                    .map_err(|unknown| ConfigError::UnknownEndpoint(unknown.0))?;

                let uri = base.join(path).map_err(|source| ConfigError::InvalidPath {
                    name: name.clone(),
                    path: path.clone(),
                    source,
                })?;

                uris.insert(endpoint, uri);
            }
        }

        Ok(Self {
            domain: domain.to_string(),
            uris,
        })
    }

    /// The domain this table was built for
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Number of resolved endpoints in this table
    pub fn len(&self) -> usize {
        self.uris.len()
    }

    /// Whether the table contains no endpoints
    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }

    /// Look up the URI for an endpoint, if configured
    pub fn try_uri(&self, endpoint: HotelEndpoint) -> Option<&Url> {
        self.uris.get(&endpoint)
    }

    /// Look up the URI for an endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the endpoint was not present in configuration. Every
    /// endpoint a consumer indexes must exist after a successful build;
    /// a miss is a programming-contract violation, not a runtime condition.
    pub fn uri(&self, endpoint: HotelEndpoint) -> &Url {
        match self.uris.get(&endpoint) {
            Some(uri) => uri,
            None => panic!("endpoint '{endpoint}' is not present in the endpoint table"),
        }
    }

    /// Look up the URI for an endpoint with dynamic parameters.
    ///
    /// Declared contract point, not implemented yet: always returns
    /// [`EndpointError::ParameterizedLookup`]. Callers must not rely on any
    /// particular parameter-substitution behavior.
    pub fn uri_with_params(
        &self,
        _endpoint: HotelEndpoint,
        _params: &HashMap<String, String>,
    ) -> Result<Url, EndpointError> {
        Err(EndpointError::ParameterizedLookup)
    }
}

impl Index<HotelEndpoint> for EndpointTable {
    type Output = Url;

    fn index(&self, endpoint: HotelEndpoint) -> &Url {
        self.uri(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn group(host: &str, paths: &[(&str, &str)]) -> EndpointGroup {
        EndpointGroup {
            host: host.to_string(),
            paths: paths
                .iter()
                .map(|(name, path)| (name.to_string(), path.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_build_resolves_catalog_against_domain() {
        // テスト項目: $domain 置換と相対パス解決で正しい URI が得られる
        // given (前提条件):
        let groups = vec![group("https://www.$domain/", &[("Catalog", "/client/catalog")])];

        // when (操作):
        let table = EndpointTable::build(&groups, "habbo.com").unwrap();

        // then (期待する結果):
        assert_eq!(
            table[HotelEndpoint::Catalog].as_str(),
            "https://www.habbo.com/client/catalog"
        );
    }

    #[test]
    fn test_build_authority_matches_substituted_domain() {
        // テスト項目: 解決された全 URI の authority が置換後のドメインを含む
        // given (前提条件):
        let groups = vec![
            group(
                "https://www.$domain/",
                &[("Catalog", "/client/catalog"), ("Help", "/help")],
            ),
            group(
                "https://images.$domain/",
                &[("ImagerAvatar", "/avatarimage"), ("ImagerBadge", "/badge")],
            ),
        ];

        // when (操作):
        let table = EndpointTable::build(&groups, "habbo.de").unwrap();

        // then (期待する結果):
        for endpoint in [
            HotelEndpoint::Catalog,
            HotelEndpoint::Help,
            HotelEndpoint::ImagerAvatar,
            HotelEndpoint::ImagerBadge,
        ] {
            let authority = table[endpoint].authority();
            assert!(
                authority.ends_with("habbo.de"),
                "authority '{authority}' does not match domain"
            );
        }
    }

    #[test]
    fn test_build_fails_entirely_on_unknown_name() {
        // テスト項目: 未知のエンドポイント名でビルド全体が失敗し、名前がエラーに含まれる
        // given (前提条件):
        let groups = vec![group(
            "https://www.$domain/",
            &[("Catalog", "/client/catalog"), ("Catalgo", "/typo")],
        )];

        // when (操作):
        let result = EndpointTable::build(&groups, "habbo.com");

        // then (期待する結果):
        match result {
            Err(ConfigError::UnknownEndpoint(name)) => assert_eq!(name, "Catalgo"),
            other => panic!("expected UnknownEndpoint error, got {other:?}"),
        }
    }

    #[test]
    fn test_build_fails_on_lowercase_name() {
        // テスト項目: 大文字小文字が一致しない名前は未知の名前として扱われる
        // given (前提条件):
        let groups = vec![group("https://www.$domain/", &[("catalog", "/client/catalog")])];

        // when (操作):
        let result = EndpointTable::build(&groups, "habbo.com");

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(ConfigError::UnknownEndpoint(name)) if name == "catalog"
        ));
    }

    #[test]
    fn test_build_fails_on_invalid_host_template() {
        // テスト項目: ドメイン置換後に絶対 URL にならないテンプレートはビルドに失敗する
        // given (前提条件):
        let groups = vec![group("www.$domain", &[("Catalog", "/client/catalog")])];

        // when (操作):
        let result = EndpointTable::build(&groups, "habbo.com");

        // then (期待する結果):
        assert!(matches!(result, Err(ConfigError::InvalidHostTemplate { .. })));
    }

    #[test]
    fn test_build_twice_yields_identical_tables() {
        // テスト項目: 同一の設定とドメインから構築したテーブルは URI 単位で一致する
        // given (前提条件):
        let groups = vec![
            group(
                "https://www.$domain/",
                &[("Api", "/api/public/"), ("Catalog", "/client/catalog")],
            ),
            group("https://images.$domain/", &[("ImagerAvatar", "/avatarimage")]),
        ];

        // when (操作):
        let table1 = EndpointTable::build(&groups, "habbo.com").unwrap();
        let table2 = EndpointTable::build(&groups, "habbo.com").unwrap();

        // then (期待する結果):
        assert_eq!(table1, table2);
    }

    #[test]
    fn test_try_uri_returns_none_for_unconfigured_endpoint() {
        // テスト項目: 設定に存在しないエンドポイントの try_uri は None を返す
        // given (前提条件):
        let groups = vec![group("https://www.$domain/", &[("Catalog", "/client/catalog")])];
        let table = EndpointTable::build(&groups, "habbo.com").unwrap();

        // when (操作):
        let result = table.try_uri(HotelEndpoint::Help);

        // then (期待する結果):
        assert!(result.is_none());
    }

    #[test]
    #[should_panic(expected = "not present in the endpoint table")]
    fn test_index_panics_for_unconfigured_endpoint() {
        // テスト項目: 設定に存在しないエンドポイントのインデックス参照はパニックする
        // given (前提条件):
        let groups = vec![group("https://www.$domain/", &[("Catalog", "/client/catalog")])];
        let table = EndpointTable::build(&groups, "habbo.com").unwrap();

        // when (操作) / then (期待する結果):
        let _ = table[HotelEndpoint::Help];
    }

    #[test]
    fn test_uri_with_params_is_not_implemented() {
        // テスト項目: パラメータ付き URI 解決は未実装エラーを返す
        // given (前提条件):
        let groups = vec![group("https://www.$domain/", &[("Catalog", "/client/catalog")])];
        let table = EndpointTable::build(&groups, "habbo.com").unwrap();
        let params = HashMap::from([("page".to_string(), "frontpage".to_string())]);

        // when (操作):
        let result = table.uri_with_params(HotelEndpoint::Catalog, &params);

        // then (期待する結果):
        assert!(matches!(result, Err(EndpointError::ParameterizedLookup)));
    }
}

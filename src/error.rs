//! Error types for the resource synchronization layer.

use thiserror::Error;

/// Errors raised while building the endpoint table from configuration.
///
/// These indicate a packaging/configuration defect, not a transient
/// condition: a failed build never produces a partial table, and the
/// previously active table (if any) stays in effect.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An endpoint name in configuration does not match the closed
    /// [`HotelEndpoint`](crate::endpoints::HotelEndpoint) set
    #[error("unknown hotel endpoint name: '{0}'")]
    UnknownEndpoint(String),

    /// A host template did not parse as an absolute URL after domain
    /// substitution
    #[error("invalid host template '{template}': {source}")]
    InvalidHostTemplate {
        template: String,
        source: url::ParseError,
    },

    /// A relative path could not be resolved against its group's base URL
    #[error("invalid path '{path}' for endpoint '{name}': {source}")]
    InvalidPath {
        name: String,
        path: String,
        source: url::ParseError,
    },

    /// Configuration file could not be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration JSON could not be deserialized
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by endpoint table lookups.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// Parameterized URI lookup is a declared contract point that is not
    /// implemented yet; callers must not rely on it
    #[error("parameterized endpoint lookup is not implemented")]
    ParameterizedLookup,
}

/// Errors that abort a single resynchronization attempt.
///
/// These are contained to the attempt that raised them: the previously
/// established domain, endpoint table and datasets stay untouched.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The connected game host does not map to any known web domain
    #[error("unsupported game host: \"{0}\"")]
    UnsupportedHost(String),

    /// Rebuilding the endpoint table for the new domain failed
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while fetching or parsing a game-definition dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The HTTP request for a dataset failed
    #[error("dataset request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The dataset body did not match the expected format
    #[error("failed to parse {dataset} data: {message}")]
    Parse {
        dataset: &'static str,
        message: String,
    },
}

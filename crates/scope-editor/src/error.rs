//! Error types for the editor layer
//!
//! Covers:
//! - Store rejections (wrapped [`ScopeError`])
//! - Identifiers outside the catalog
//! - Catalog and script loading failures

use scope_core::{DataNetworkId, ScopeError, SliceId};
use std::path::PathBuf;

/// Editor error type
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Store rejected the edit
    #[error(transparent)]
    Scope(#[from] ScopeError),

    /// Slice is not one of the selectable slices
    #[error("slice `{0}` is not in the catalog")]
    UnknownSlice(SliceId),

    /// Data network is not one of the selectable data networks
    #[error("data network `{0}` is not in the catalog")]
    UnknownDataNetwork(DataNetworkId),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl EditorError {
    /// Check if the error came from the store
    #[inline]
    #[must_use]
    pub fn is_store_rejection(&self) -> bool {
        matches!(self, Self::Scope(_))
    }

    /// Check if an identifier was outside the catalog
    #[inline]
    #[must_use]
    pub fn is_unknown_identifier(&self) -> bool {
        matches!(self, Self::UnknownSlice(_) | Self::UnknownDataNetwork(_))
    }
}

/// Catalog / script loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid YAML
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Extension is not .toml, .yaml, .yml or .json
    #[error("unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Parsed but semantically unusable
    #[error("invalid catalog: {0}")]
    Invalid(String),
}

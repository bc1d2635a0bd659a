//! Identifier catalog
//!
//! The selectable slices and data networks. Edits may only use identifiers
//! listed here; the catalog does not judge identifier syntax.

use crate::error::{ConfigError, EditorError};
use crate::format::ConfigFormat;
use indexmap::IndexSet;
use scope_core::{DataNetworkId, Scope, SliceId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Slices and data networks offered for selection, in configured order
///
/// Duplicate entries collapse onto their first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeCatalog {
    /// Selectable slices
    slices: IndexSet<SliceId>,

    /// Selectable data networks
    #[serde(alias = "dataNetworks")]
    data_networks: IndexSet<DataNetworkId>,
}

impl Default for ScopeCatalog {
    fn default() -> Self {
        Self::new(["slice-1", "slice-2"], ["dn-1", "dn-2"])
    }
}

impl ScopeCatalog {
    /// Create catalog from identifier lists
    #[must_use]
    pub fn new<S, D>(
        slices: impl IntoIterator<Item = S>,
        data_networks: impl IntoIterator<Item = D>,
    ) -> Self
    where
        S: Into<SliceId>,
        D: Into<DataNetworkId>,
    {
        Self {
            slices: slices.into_iter().map(Into::into).collect(),
            data_networks: data_networks.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse from TOML
    ///
    /// # Errors
    /// Returns error if TOML is invalid or the catalog fails validation
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Toml.parse::<Self>(text)?.validated()
    }

    /// Parse from YAML
    ///
    /// # Errors
    /// Returns error if YAML is invalid or the catalog fails validation
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Yaml.parse::<Self>(text)?.validated()
    }

    /// Parse from JSON
    ///
    /// # Errors
    /// Returns error if JSON is invalid or the catalog fails validation
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Json.parse::<Self>(text)?.validated()
    }

    /// Load from a `.toml`, `.yaml`/`.yml` or `.json` file
    ///
    /// # Errors
    /// Unsupported extension, unreadable file, parse failure or failed
    /// validation
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let catalog = ConfigFormat::load::<Self>(path)?.validated()?;
        tracing::info!(
            path = %path.display(),
            slices = catalog.slices.len(),
            data_networks = catalog.data_networks.len(),
            "loaded scope catalog"
        );
        Ok(catalog)
    }

    /// Require both lists to be non-empty and free of empty identifiers
    fn validated(self) -> Result<Self, ConfigError> {
        if self.slices.is_empty() {
            return Err(ConfigError::Invalid("no slices configured".to_string()));
        }
        if self.data_networks.is_empty() {
            return Err(ConfigError::Invalid("no data networks configured".to_string()));
        }
        if self.slices.iter().any(SliceId::is_empty) {
            return Err(ConfigError::Invalid("empty slice identifier".to_string()));
        }
        if self.data_networks.iter().any(DataNetworkId::is_empty) {
            return Err(ConfigError::Invalid("empty data network identifier".to_string()));
        }
        Ok(self)
    }

    /// Selectable slices in order
    #[inline]
    pub fn slices(&self) -> impl Iterator<Item = &SliceId> {
        self.slices.iter()
    }

    /// Selectable data networks in order
    #[inline]
    pub fn data_networks(&self) -> impl Iterator<Item = &DataNetworkId> {
        self.data_networks.iter()
    }

    /// Check if both halves of `scope` are selectable
    #[inline]
    #[must_use]
    pub fn allows(&self, scope: &Scope) -> bool {
        self.check(scope).is_ok()
    }

    /// Check both halves of `scope` against the catalog
    ///
    /// # Errors
    /// [`EditorError::UnknownSlice`] or [`EditorError::UnknownDataNetwork`]
    pub fn check(&self, scope: &Scope) -> Result<(), EditorError> {
        if !self.slices.contains(&scope.slice) {
            return Err(EditorError::UnknownSlice(scope.slice.clone()));
        }
        if !self.data_networks.contains(&scope.data_network) {
            return Err(EditorError::UnknownDataNetwork(scope.data_network.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog() {
        let catalog = ScopeCatalog::default();
        let slices: Vec<_> = catalog.slices().map(SliceId::as_str).collect();
        let dns: Vec<_> = catalog.data_networks().map(DataNetworkId::as_str).collect();
        assert_eq!(slices, vec!["slice-1", "slice-2"]);
        assert_eq!(dns, vec!["dn-1", "dn-2"]);
    }

    #[test]
    fn duplicates_collapse_in_order() {
        let catalog = ScopeCatalog::new(["b", "a", "b"], ["x"]);
        let slices: Vec<_> = catalog.slices().map(SliceId::as_str).collect();
        assert_eq!(slices, vec!["b", "a"]);
    }

    #[test]
    fn toml_catalog() {
        let catalog = ScopeCatalog::from_toml_str(
            r#"
            slices = ["embb", "urllc"]
            data_networks = ["internet", "ims"]
            "#,
        )
        .unwrap();
        assert!(catalog.allows(&Scope::new("urllc", "ims")));
        assert!(!catalog.allows(&Scope::new("mmtc", "ims")));
    }

    #[test]
    fn yaml_catalog_accepts_camel_case_alias() {
        let catalog = ScopeCatalog::from_yaml_str(
            "slices: [embb]\ndataNetworks: [internet]\n",
        )
        .unwrap();
        assert!(catalog.allows(&Scope::new("embb", "internet")));
    }

    #[test]
    fn json_catalog() {
        let catalog =
            ScopeCatalog::from_json_str(r#"{"slices": ["s"], "data_networks": ["d"]}"#).unwrap();
        assert_eq!(catalog, ScopeCatalog::new(["s"], ["d"]));
    }

    #[test]
    fn rejects_empty_lists() {
        let err = ScopeCatalog::from_toml_str("slices = []\ndata_networks = [\"d\"]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = ScopeCatalog::from_toml_str("slices = [\"s\"]\ndata_networks = []").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_empty_identifier() {
        let err = ScopeCatalog::from_json_str(r#"{"slices": [""], "data_networks": ["d"]}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn check_reports_first_unknown_half() {
        let catalog = ScopeCatalog::default();

        let err = catalog.check(&Scope::new("slice-9", "dn-9")).unwrap_err();
        assert!(matches!(err, EditorError::UnknownSlice(ref s) if s == "slice-9"));

        let err = catalog.check(&Scope::new("slice-1", "dn-9")).unwrap_err();
        assert!(matches!(err, EditorError::UnknownDataNetwork(ref d) if d == "dn-9"));

        assert!(catalog.check(&Scope::new("slice-2", "dn-1")).is_ok());
    }
}

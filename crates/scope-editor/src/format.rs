//! Configuration file formats
//!
//! Catalogs and edit scripts can be written as TOML, YAML or JSON; the
//! format is picked from the file extension.

use crate::error::ConfigError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Supported configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,

    /// `.yaml` / `.yml`
    Yaml,

    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension (case-insensitive)
    ///
    /// # Errors
    /// [`ConfigError::UnsupportedFormat`] for any other extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Deserialize `text` in this format
    ///
    /// # Errors
    /// Returns the parser error of the selected format
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, ConfigError> {
        match self {
            Self::Toml => Ok(toml::from_str(text)?),
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
            Self::Json => Ok(serde_json::from_str(text)?),
        }
    }

    /// Read and deserialize a file, detecting the format from its extension
    ///
    /// # Errors
    /// Unsupported extension, I/O failure or parse failure
    pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let format = Self::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?format, "loading configuration");
        format.parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn detects_extensions() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.YML")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")).unwrap(), ConfigFormat::Json);
    }

    #[test]
    fn rejects_unknown_extension() {
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.ini")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            ConfigFormat::from_path(Path::new("catalog")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn parses_each_format() {
        let toml: BTreeMap<String, u32> = ConfigFormat::Toml.parse("a = 1").unwrap();
        let yaml: BTreeMap<String, u32> = ConfigFormat::Yaml.parse("a: 1").unwrap();
        let json: BTreeMap<String, u32> = ConfigFormat::Json.parse(r#"{"a": 1}"#).unwrap();
        assert_eq!(toml, yaml);
        assert_eq!(yaml, json);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result: Result<BTreeMap<String, u32>, _> =
            ConfigFormat::load(Path::new("/nonexistent/catalog.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}

//! Edit scripts
//!
//! A script is an ordered list of [`EditOp`]s, replayed against a session.
//! YAML and JSON scripts may be a bare list; TOML scripts use `[[ops]]`.

use crate::error::ConfigError;
use crate::format::ConfigFormat;
use scope_core::Scope;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::path::Path;

/// One scripted edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    /// Add a scope
    Add {
        /// Scope to add
        scope: Scope,
    },

    /// Replace an existing scope
    Update {
        /// Scope currently configured
        original: Scope,
        /// Replacement
        new: Scope,
    },

    /// Remove an existing scope
    Remove {
        /// Scope to remove
        scope: Scope,
    },
}

impl Display for EditOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add { scope } => write!(f, "add {scope}"),
            Self::Update { original, new } => write!(f, "update {original} -> {new}"),
            Self::Remove { scope } => write!(f, "remove {scope}"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScriptFile {
    List(Vec<EditOp>),
    Table { ops: Vec<EditOp> },
}

impl ScriptFile {
    fn into_ops(self) -> Vec<EditOp> {
        match self {
            Self::List(ops) | Self::Table { ops } => ops,
        }
    }
}

/// Parse a script in the given format
///
/// # Errors
/// Returns the parser error of `format`
pub fn parse_script(format: ConfigFormat, text: &str) -> Result<Vec<EditOp>, ConfigError> {
    Ok(format.parse::<ScriptFile>(text)?.into_ops())
}

/// Load a script file, detecting the format from its extension
///
/// # Errors
/// Unsupported extension, unreadable file or parse failure
pub fn load_script(path: &Path) -> Result<Vec<EditOp>, ConfigError> {
    let ops = ConfigFormat::load::<ScriptFile>(path)?.into_ops();
    tracing::debug!(path = %path.display(), ops = ops.len(), "loaded edit script");
    Ok(ops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expected() -> Vec<EditOp> {
        vec![
            EditOp::Add {
                scope: Scope::new("slice-1", "dn-1"),
            },
            EditOp::Update {
                original: Scope::new("slice-1", "dn-1"),
                new: Scope::new("slice-2", "dn-1"),
            },
            EditOp::Remove {
                scope: Scope::new("slice-2", "dn-1"),
            },
        ]
    }

    #[test]
    fn yaml_list_script() {
        let text = r"
- op: add
  scope: { slice: slice-1, dataNetwork: dn-1 }
- op: update
  original: { slice: slice-1, dataNetwork: dn-1 }
  new: { slice: slice-2, dataNetwork: dn-1 }
- op: remove
  scope: { slice: slice-2, dataNetwork: dn-1 }
";
        assert_eq!(parse_script(ConfigFormat::Yaml, text).unwrap(), expected());
    }

    #[test]
    fn json_list_script() {
        let text = r#"[
            {"op": "add", "scope": {"slice": "slice-1", "dataNetwork": "dn-1"}},
            {"op": "update",
             "original": {"slice": "slice-1", "dataNetwork": "dn-1"},
             "new": {"slice": "slice-2", "dataNetwork": "dn-1"}},
            {"op": "remove", "scope": {"slice": "slice-2", "dataNetwork": "dn-1"}}
        ]"#;
        assert_eq!(parse_script(ConfigFormat::Json, text).unwrap(), expected());
    }

    #[test]
    fn toml_table_script() {
        let text = r#"
[[ops]]
op = "add"
scope = { slice = "slice-1", dataNetwork = "dn-1" }

[[ops]]
op = "update"
original = { slice = "slice-1", dataNetwork = "dn-1" }
new = { slice = "slice-2", dataNetwork = "dn-1" }

[[ops]]
op = "remove"
scope = { slice = "slice-2", dataNetwork = "dn-1" }
"#;
        assert_eq!(parse_script(ConfigFormat::Toml, text).unwrap(), expected());
    }

    #[test]
    fn unknown_op_is_rejected() {
        let text = r#"[{"op": "rename", "scope": {"slice": "a", "dataNetwork": "b"}}]"#;
        assert!(parse_script(ConfigFormat::Json, text).is_err());
    }

    #[test]
    fn display_ops() {
        let ops = expected();
        assert_eq!(ops[0].to_string(), "add slice-1/dn-1");
        assert_eq!(ops[1].to_string(), "update slice-1/dn-1 -> slice-2/dn-1");
        assert_eq!(ops[2].to_string(), "remove slice-2/dn-1");
    }
}

//! Editor drafts and rows
//!
//! A [`ScopeDraft`] is what an editor row holds while the user is still
//! choosing; it only becomes a [`Scope`] once both halves are chosen.

use scope_core::{scopes, Collection, DataNetworkId, Scope, SliceId};
use std::iter;

/// Key of the trailing blank row used to create new scopes
pub const CREATION_ROW_KEY: &str = "new";

/// Possibly incomplete (slice, data network) selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeDraft {
    /// Chosen slice
    pub slice: Option<SliceId>,

    /// Chosen data network
    pub data_network: Option<DataNetworkId>,
}

impl ScopeDraft {
    /// Draft with nothing chosen
    #[inline]
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Draft prefilled from an existing scope
    #[inline]
    #[must_use]
    pub fn from_scope(scope: &Scope) -> Self {
        Self {
            slice: Some(scope.slice.clone()),
            data_network: Some(scope.data_network.clone()),
        }
    }

    /// With slice chosen
    #[inline]
    #[must_use]
    pub fn with_slice(mut self, slice: impl Into<SliceId>) -> Self {
        self.slice = Some(slice.into());
        self
    }

    /// With data network chosen
    #[inline]
    #[must_use]
    pub fn with_data_network(mut self, data_network: impl Into<DataNetworkId>) -> Self {
        self.data_network = Some(data_network.into());
        self
    }

    /// Check if both halves are chosen
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slice.is_some() && self.data_network.is_some()
    }

    /// The chosen scope, if complete
    #[must_use]
    pub fn to_scope(&self) -> Option<Scope> {
        match (&self.slice, &self.data_network) {
            (Some(slice), Some(data_network)) => Some(Scope::new(slice.clone(), data_network.clone())),
            _ => None,
        }
    }
}

impl From<&Scope> for ScopeDraft {
    fn from(scope: &Scope) -> Self {
        Self::from_scope(scope)
    }
}

/// One editable row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorRow {
    key: String,
    original: Option<Scope>,
    draft: ScopeDraft,
}

impl EditorRow {
    /// Row editing an existing scope
    #[must_use]
    pub fn existing(scope: &Scope) -> Self {
        Self {
            key: format!("{} + {}", scope.slice, scope.data_network),
            original: Some(scope.clone()),
            draft: ScopeDraft::from_scope(scope),
        }
    }

    /// Blank row for creating a scope
    #[must_use]
    pub fn creation() -> Self {
        Self {
            key: CREATION_ROW_KEY.to_string(),
            original: None,
            draft: ScopeDraft::blank(),
        }
    }

    /// Stable row key
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Scope this row edits; `None` for the creation row
    #[inline]
    #[must_use]
    pub fn original(&self) -> Option<&Scope> {
        self.original.as_ref()
    }

    /// Initial selection
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &ScopeDraft {
        &self.draft
    }

    /// Check if this is the creation row
    #[inline]
    #[must_use]
    pub fn is_creation(&self) -> bool {
        self.original.is_none()
    }
}

/// One row per configured scope, then the creation row
#[must_use]
pub fn editor_rows(collection: &Collection) -> Vec<EditorRow> {
    scopes(collection)
        .map(|scope| EditorRow::existing(&scope))
        .chain(iter::once(EditorRow::creation()))
        .collect()
}

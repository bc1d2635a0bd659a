//! Editing session
//!
//! Owns the caller-held [`Collection`] snapshot for the lifetime of one
//! editing session. Each successful save replaces the snapshot wholesale;
//! a rejected save leaves it untouched.

use crate::catalog::ScopeCatalog;
use crate::draft::{editor_rows, EditorRow, ScopeDraft};
use crate::error::EditorError;
use crate::script::EditOp;
use scope_core::{flatten, Collection, Scope, ScopeStore};
use tracing::{debug, warn};

/// Editing session over one scope configuration
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    /// Selectable identifiers
    catalog: ScopeCatalog,
    /// Reconciliation engine
    store: ScopeStore,
    /// Current snapshot
    collection: Collection,
}

impl EditorSession {
    /// Start with an empty configuration
    #[inline]
    #[must_use]
    pub fn new(catalog: ScopeCatalog) -> Self {
        Self::with_collection(catalog, Collection::new())
    }

    /// Resume from an existing snapshot
    #[inline]
    #[must_use]
    pub fn with_collection(catalog: ScopeCatalog, collection: Collection) -> Self {
        Self {
            catalog,
            store: ScopeStore::new(),
            collection,
        }
    }

    /// Selectable identifiers
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &ScopeCatalog {
        &self.catalog
    }

    /// Current snapshot
    #[inline]
    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// End the session, keeping the final snapshot
    #[inline]
    #[must_use]
    pub fn into_collection(self) -> Collection {
        self.collection
    }

    /// Current scopes in display order
    #[must_use]
    pub fn scopes(&self) -> Vec<Scope> {
        flatten(&self.collection)
    }

    /// One row per scope plus the trailing creation row
    #[must_use]
    pub fn rows(&self) -> Vec<EditorRow> {
        editor_rows(&self.collection)
    }

    /// Save the creation row
    ///
    /// Returns `Ok(None)` without touching the snapshot while the draft is
    /// incomplete. Saving an already configured scope succeeds and changes
    /// nothing.
    ///
    /// # Errors
    /// [`EditorError::UnknownSlice`] / [`EditorError::UnknownDataNetwork`]
    pub fn save_new(&mut self, draft: &ScopeDraft) -> Result<Option<Scope>, EditorError> {
        let Some(scope) = draft.to_scope() else {
            debug!("incomplete draft, nothing to add");
            return Ok(None);
        };

        self.admit(&scope)?;
        self.collection = self.store.add(&self.collection, &scope);
        Ok(Some(scope))
    }

    /// Save the row editing `original`
    ///
    /// Returns `Ok(None)` without touching the snapshot while the draft is
    /// incomplete.
    ///
    /// # Errors
    /// Unknown identifiers, or the store's rejection of the update
    pub fn save_existing(
        &mut self,
        original: &Scope,
        draft: &ScopeDraft,
    ) -> Result<Option<Scope>, EditorError> {
        let Some(scope) = draft.to_scope() else {
            debug!(%original, "incomplete draft, nothing to update");
            return Ok(None);
        };

        self.admit(&scope)?;
        self.collection = self
            .store
            .update(&self.collection, original, &scope)
            .map_err(|err| {
                warn!(%original, new = %scope, %err, "update rejected");
                err
            })?;
        Ok(Some(scope))
    }

    /// Remove `scope`
    ///
    /// # Errors
    /// Store rejection if `scope` is not configured
    pub fn remove(&mut self, scope: &Scope) -> Result<(), EditorError> {
        self.collection = self
            .store
            .remove(&self.collection, scope)
            .map_err(|err| {
                warn!(%scope, %err, "remove rejected");
                err
            })?;
        Ok(())
    }

    /// Apply one scripted edit
    ///
    /// # Errors
    /// Same as the corresponding save / remove call
    pub fn apply(&mut self, op: &EditOp) -> Result<(), EditorError> {
        debug!(%op, "applying edit");
        match op {
            EditOp::Add { scope } => self.save_new(&ScopeDraft::from_scope(scope)).map(drop),
            EditOp::Update { original, new } => self
                .save_existing(original, &ScopeDraft::from_scope(new))
                .map(drop),
            EditOp::Remove { scope } => self.remove(scope),
        }
    }

    fn admit(&self, scope: &Scope) -> Result<(), EditorError> {
        self.catalog
            .check(scope)
            .map_err(|err| {
                warn!(%scope, %err, "scope outside catalog");
                err
            })
    }
}

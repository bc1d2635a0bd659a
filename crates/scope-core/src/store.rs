//! Scope store
//!
//! Reconciliation of the two-level [`Collection`] under scope edits. Every
//! operation takes a snapshot by reference and returns the next snapshot;
//! the input is never modified.
//!
//! After each operation:
//! - a slice has at most one group
//! - a group exposes each data network at most once
//! - no group is empty
//! - groups and entries keep insertion order; an entry moved to another
//!   slice lands at the end of that slice's group

use crate::error::{InvalidReason, Operation, ScopeError};
use crate::model::{Collection, DataNetworkEntry, Scope, SliceGroup};
use crate::sequence::{with_item_appended, with_updated_item_at, without_item_at};
use tracing::{debug, trace};

/// Handle bundling the store operations
///
/// Stateless; every method forwards to the free function of the same name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeStore;

impl ScopeStore {
    /// Create new store handle
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// See [`add_scope`]
    #[inline]
    #[must_use]
    pub fn add(&self, collection: &Collection, scope: &Scope) -> Collection {
        add_scope(collection, scope)
    }

    /// See [`update_scope`]
    ///
    /// # Errors
    /// Same as [`update_scope`]
    #[inline]
    pub fn update(
        &self,
        collection: &Collection,
        original: &Scope,
        new: &Scope,
    ) -> Result<Collection, ScopeError> {
        update_scope(collection, original, new)
    }

    /// See [`remove_scope`]
    ///
    /// # Errors
    /// Same as [`remove_scope`]
    #[inline]
    pub fn remove(&self, collection: &Collection, scope: &Scope) -> Result<Collection, ScopeError> {
        remove_scope(collection, scope)
    }
}

/// Position of an existing scope inside a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Location {
    slice_index: usize,
    entry_index: usize,
}

/// Add `scope` to the collection
///
/// Adding a scope that is already configured returns the collection
/// unchanged. A new data network is appended to its slice's group; a new
/// slice gets a fresh group at the end of the collection.
#[must_use]
pub fn add_scope(collection: &Collection, scope: &Scope) -> Collection {
    let groups = collection.group_vector();

    let Some(slice_index) = collection.position(&scope.slice) else {
        debug!(slice = %scope.slice, data_network = %scope.data_network, "creating slice group");
        return Collection::from_groups(with_item_appended(groups, SliceGroup::single(scope)));
    };

    let group = &groups[slice_index];
    if group.contains(&scope.data_network) {
        trace!(%scope, "scope already configured");
        return collection.clone();
    }

    debug!(slice = %scope.slice, data_network = %scope.data_network, "appending data network");
    let entries = with_item_appended(
        group.entry_vector(),
        DataNetworkEntry::new(scope.data_network.clone()),
    );
    Collection::from_groups(with_updated_item_at(
        groups,
        slice_index,
        group.with_entries(entries),
    ))
}

/// Replace `original` with `new`
///
/// Within one slice the entry is replaced in place, keeping its index.
/// Across slices the update is a removal of `original` followed by
/// [`add_scope`] of `new`; if that removal dropped the destination group,
/// the group is recreated at the end.
///
/// # Errors
/// - [`ScopeError::InvalidOperation`] if `original` is not configured
/// - [`ScopeError::ConstraintViolation`] if a same-slice update targets a
///   data network the slice already exposes under another entry
pub fn update_scope(
    collection: &Collection,
    original: &Scope,
    new: &Scope,
) -> Result<Collection, ScopeError> {
    let location = locate(collection, original)
        .map_err(|reason| ScopeError::invalid_operation(Operation::Update, reason))?;

    if original == new {
        trace!(scope = %original, "update to identical scope");
        return Ok(collection.clone());
    }

    if original.slice == new.slice {
        return replace_in_group(collection, location, original, new);
    }

    debug!(from = %original, to = %new, "moving scope across slices");
    Ok(add_scope(&remove_at(collection, location), new))
}

/// Remove `scope` from the collection
///
/// A group losing its last entry is dropped; other groups keep their
/// relative order.
///
/// # Errors
/// [`ScopeError::InvalidOperation`] if `scope` is not configured
pub fn remove_scope(collection: &Collection, scope: &Scope) -> Result<Collection, ScopeError> {
    let location = locate(collection, scope)
        .map_err(|reason| ScopeError::invalid_operation(Operation::Remove, reason))?;

    Ok(remove_at(collection, location))
}

fn locate(collection: &Collection, scope: &Scope) -> Result<Location, InvalidReason> {
    let slice_index = collection
        .position(&scope.slice)
        .ok_or_else(|| InvalidReason::SliceNotFound(scope.slice.clone()))?;

    let entry_index = collection.group_vector()[slice_index]
        .position(&scope.data_network)
        .ok_or_else(|| InvalidReason::DataNetworkNotFound(scope.clone()))?;

    trace!(%scope, slice_index, entry_index, "located scope");
    Ok(Location {
        slice_index,
        entry_index,
    })
}

fn replace_in_group(
    collection: &Collection,
    location: Location,
    original: &Scope,
    new: &Scope,
) -> Result<Collection, ScopeError> {
    let groups = collection.group_vector();
    let group = &groups[location.slice_index];

    // original != new here, so any hit is a different entry
    if group.contains(&new.data_network) {
        return Err(ScopeError::ConstraintViolation {
            original: original.clone(),
            slice: new.slice.clone(),
            conflicting: new.data_network.clone(),
        });
    }

    debug!(from = %original, to = %new, "replacing data network in place");
    let entries = with_updated_item_at(
        group.entry_vector(),
        location.entry_index,
        DataNetworkEntry::new(new.data_network.clone()),
    );
    Ok(Collection::from_groups(with_updated_item_at(
        groups,
        location.slice_index,
        group.with_entries(entries),
    )))
}

fn remove_at(collection: &Collection, location: Location) -> Collection {
    let groups = collection.group_vector();
    let group = &groups[location.slice_index];
    let entries = without_item_at(group.entry_vector(), location.entry_index);

    if entries.is_empty() {
        debug!(slice = %group.slice(), "dropping empty slice group");
        Collection::from_groups(without_item_at(groups, location.slice_index))
    } else {
        Collection::from_groups(with_updated_item_at(
            groups,
            location.slice_index,
            group.with_entries(entries),
        ))
    }
}

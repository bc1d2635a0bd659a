//! Flat projection of a collection
//!
//! Turns the grouped [`Collection`] back into independent [`Scope`] values,
//! one per editable row.

use crate::model::{Collection, Scope};

/// Scopes in collection order, lazily
pub fn scopes(collection: &Collection) -> impl Iterator<Item = Scope> + '_ {
    collection.groups().flat_map(|group| {
        group
            .entries()
            .map(move |entry| Scope::new(group.slice().clone(), entry.data_network().clone()))
    })
}

/// Flatten `collection` into one scope per (group, entry) pair
///
/// Groups are visited in collection order and entries in group order.
#[must_use]
pub fn flatten(collection: &Collection) -> Vec<Scope> {
    scopes(collection).collect()
}

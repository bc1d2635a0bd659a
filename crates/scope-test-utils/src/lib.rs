//! Testing utilities for the slice scope workspace
//!
//! Shared fixtures, invariant assertions and proptest strategies.

#![allow(missing_docs)]

use proptest::prelude::*;
use scope_core::{add_scope, flatten, update_scope, Collection, Scope};
use std::collections::HashSet;

pub fn scope(slice: &str, data_network: &str) -> Scope {
    Scope::new(slice, data_network)
}

/// Collection built by adding `scopes` in order
pub fn collection_of(scopes: &[(&str, &str)]) -> Collection {
    scopes.iter().fold(Collection::new(), |acc, (slice, dn)| {
        add_scope(&acc, &scope(slice, dn))
    })
}

/// Flattened collection as owned string pairs, for readable assertions
pub fn pairs(collection: &Collection) -> Vec<(String, String)> {
    flatten(collection)
        .into_iter()
        .map(|s| (s.slice.to_string(), s.data_network.to_string()))
        .collect()
}

pub fn owned_pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(slice, dn)| ((*slice).to_string(), (*dn).to_string()))
        .collect()
}

/// Panics unless slices are unique, data networks are unique per slice and
/// no group is empty
pub fn assert_invariants(collection: &Collection) {
    let mut slices = HashSet::new();

    for group in collection.groups() {
        assert!(
            slices.insert(group.slice().clone()),
            "slice `{}` has more than one group",
            group.slice()
        );
        assert!(!group.is_empty(), "slice `{}` has an empty group", group.slice());

        let mut data_networks = HashSet::new();
        for entry in group.entries() {
            assert!(
                data_networks.insert(entry.data_network().clone()),
                "data network `{}` repeated under slice `{}`",
                entry.data_network(),
                group.slice()
            );
        }
    }
}

/// One randomly generated edit
#[derive(Debug, Clone)]
pub enum Step {
    Add(Scope),
    /// Update the existing scope at `pick % len` to the given scope
    Update(usize, Scope),
}

pub fn arb_slice() -> impl Strategy<Value = String> {
    (0..4u8).prop_map(|n| format!("slice-{n}"))
}

pub fn arb_data_network() -> impl Strategy<Value = String> {
    (0..4u8).prop_map(|n| format!("dn-{n}"))
}

pub fn arb_scope() -> impl Strategy<Value = Scope> {
    (arb_slice(), arb_data_network()).prop_map(|(slice, dn)| Scope::new(slice, dn))
}

pub fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        arb_scope().prop_map(Step::Add),
        (any::<usize>(), arb_scope()).prop_map(|(pick, s)| Step::Update(pick, s)),
    ]
}

/// Apply `step`, skipping updates the store rejects
pub fn apply_step(collection: &Collection, step: &Step) -> Collection {
    match step {
        Step::Add(s) => add_scope(collection, s),
        Step::Update(pick, new) => {
            let current = flatten(collection);
            if current.is_empty() {
                return add_scope(collection, new);
            }
            let original = &current[pick % current.len()];
            update_scope(collection, original, new).unwrap_or_else(|_| collection.clone())
        }
    }
}

/// Collections reachable from empty through adds and valid updates
pub fn arb_reachable() -> impl Strategy<Value = Collection> {
    prop::collection::vec(arb_step(), 0..24).prop_map(|steps| {
        steps
            .iter()
            .fold(Collection::new(), |acc, step| apply_step(&acc, step))
    })
}

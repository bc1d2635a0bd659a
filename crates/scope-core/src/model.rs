//! Scope data model
//!
//! Provides the identifiers, the [`Scope`] edit unit and the two-level
//! [`Collection`] of [`SliceGroup`]s that the store reconciles.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use crate::sequence::find_index;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub struct $name(Arc<str>);

        impl $name {
            /// Create identifier from any string-like value
            #[inline]
            #[must_use]
            pub fn new(value: impl AsRef<str>) -> Self {
                Self(Arc::from(value.as_ref()))
            }

            /// Borrow the identifier text
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Check if the identifier text is empty
            #[inline]
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(Arc::from(value))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0.as_ref().to_owned()
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

identifier! {
    /// Network slice identifier
    ///
    /// Opaque; compared by value. Cloning shares the underlying text.
    SliceId
}

identifier! {
    /// Data network identifier
    ///
    /// Opaque; compared by value. Cloning shares the underlying text.
    DataNetworkId
}

/// A single (slice, data network) pairing
///
/// The unit of input and output at the store boundary. Never stored as-is:
/// the [`Collection`] keeps scopes grouped by slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope {
    /// Slice the data network is exposed under
    pub slice: SliceId,

    /// Exposed data network
    pub data_network: DataNetworkId,
}

impl Scope {
    /// Create new scope
    #[inline]
    #[must_use]
    pub fn new(slice: impl Into<SliceId>, data_network: impl Into<DataNetworkId>) -> Self {
        Self {
            slice: slice.into(),
            data_network: data_network.into(),
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.slice, self.data_network)
    }
}

/// One data network exposed under a slice group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataNetworkEntry {
    data_network: DataNetworkId,
}

impl DataNetworkEntry {
    #[inline]
    pub(crate) fn new(data_network: DataNetworkId) -> Self {
        Self { data_network }
    }

    /// Exposed data network
    #[inline]
    #[must_use]
    pub fn data_network(&self) -> &DataNetworkId {
        &self.data_network
    }
}

/// All data networks currently exposed under one slice
///
/// Entries keep the order they were first added in and are never empty:
/// the store drops a group together with its last entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceGroup {
    slice: SliceId,
    #[serde(rename = "dataNetworks")]
    entries: Vector<DataNetworkEntry>,
}

impl SliceGroup {
    /// Group holding exactly the given scope
    pub(crate) fn single(scope: &Scope) -> Self {
        Self {
            slice: scope.slice.clone(),
            entries: Vector::unit(DataNetworkEntry::new(scope.data_network.clone())),
        }
    }

    /// Same slice, different entries
    pub(crate) fn with_entries(&self, entries: Vector<DataNetworkEntry>) -> Self {
        Self {
            slice: self.slice.clone(),
            entries,
        }
    }

    pub(crate) fn entry_vector(&self) -> &Vector<DataNetworkEntry> {
        &self.entries
    }

    /// Slice this group belongs to
    #[inline]
    #[must_use]
    pub fn slice(&self) -> &SliceId {
        &self.slice
    }

    /// Entries in insertion order
    #[inline]
    pub fn entries(&self) -> impl Iterator<Item = &DataNetworkEntry> {
        self.entries.iter()
    }

    /// Number of exposed data networks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for groups reachable through the store
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry for `data_network`, if exposed
    #[inline]
    #[must_use]
    pub fn position(&self, data_network: &DataNetworkId) -> Option<usize> {
        find_index(&self.entries, |entry| entry.data_network == *data_network)
    }

    /// Check if `data_network` is exposed under this slice
    #[inline]
    #[must_use]
    pub fn contains(&self, data_network: &DataNetworkId) -> bool {
        self.position(data_network).is_some()
    }
}

/// The full scope configuration: slice groups in creation order
///
/// Immutable value. Store operations return a new collection that shares
/// structure with the previous one, so holding on to an older snapshot is
/// always safe and cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Collection {
    groups: Vector<SliceGroup>,
}

impl Collection {
    /// Empty collection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_groups(groups: Vector<SliceGroup>) -> Self {
        Self { groups }
    }

    pub(crate) fn group_vector(&self) -> &Vector<SliceGroup> {
        &self.groups
    }

    /// Slice groups in creation order
    #[inline]
    pub fn groups(&self) -> impl Iterator<Item = &SliceGroup> {
        self.groups.iter()
    }

    /// Number of slice groups
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no scope is configured
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of scopes across all groups
    #[must_use]
    pub fn scope_count(&self) -> usize {
        self.groups.iter().map(SliceGroup::len).sum()
    }

    /// Index of the group for `slice`, if any
    #[inline]
    #[must_use]
    pub fn position(&self, slice: &SliceId) -> Option<usize> {
        find_index(&self.groups, |group| group.slice == *slice)
    }

    /// Group for `slice`, if any
    #[inline]
    #[must_use]
    pub fn group(&self, slice: &SliceId) -> Option<&SliceGroup> {
        self.position(slice).and_then(|index| self.groups.get(index))
    }

    /// Check if `scope` is configured
    #[inline]
    #[must_use]
    pub fn contains(&self, scope: &Scope) -> bool {
        self.group(&scope.slice)
            .is_some_and(|group| group.contains(&scope.data_network))
    }
}

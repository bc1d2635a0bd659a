//! Error types for scope reconciliation
//!
//! Adding a scope never fails (a duplicate add is a no-op), so every error
//! here comes from an update or a removal whose target is wrong.

use crate::model::{DataNetworkId, Scope, SliceId};
use std::fmt::{self, Display, Formatter};

/// Store operation that can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Replace one scope with another
    Update,

    /// Drop a scope
    Remove,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Update => f.write_str("update"),
            Self::Remove => f.write_str("remove"),
        }
    }
}

/// Why an edit target could not be located
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidReason {
    /// No group exists for the slice
    #[error("slice `{0}` is not configured")]
    SliceNotFound(SliceId),

    /// The slice exists but does not expose the data network
    #[error("scope `{0}` is not configured")]
    DataNetworkNotFound(Scope),
}

/// Scope store error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    /// Edit target does not exist in the collection
    #[error("invalid {operation}: {reason}")]
    InvalidOperation {
        /// Rejected operation
        operation: Operation,
        /// Lookup failure
        reason: InvalidReason,
    },

    /// Same-slice update onto a data network the slice already exposes
    #[error("cannot update `{original}` to `{conflicting}`: data network already exposed under slice `{slice}`")]
    ConstraintViolation {
        /// Scope being updated
        original: Scope,
        /// Slice shared by both scopes
        slice: SliceId,
        /// Data network that is already taken
        conflicting: DataNetworkId,
    },
}

impl ScopeError {
    /// Create invalid operation error
    #[inline]
    #[must_use]
    pub fn invalid_operation(operation: Operation, reason: InvalidReason) -> Self {
        Self::InvalidOperation { operation, reason }
    }

    /// Check if the edit target was missing
    #[inline]
    #[must_use]
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }

    /// Check if the edit would have duplicated an entry
    #[inline]
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_operation_message() {
        let err = ScopeError::invalid_operation(
            Operation::Update,
            InvalidReason::SliceNotFound(SliceId::new("slice-9")),
        );
        assert!(err.is_invalid_operation());
        assert!(!err.is_constraint_violation());
        assert_eq!(
            err.to_string(),
            "invalid update: slice `slice-9` is not configured"
        );
    }

    #[test]
    fn missing_data_network_message() {
        let err = ScopeError::invalid_operation(
            Operation::Remove,
            InvalidReason::DataNetworkNotFound(Scope::new("a", "x")),
        );
        assert_eq!(err.to_string(), "invalid remove: scope `a/x` is not configured");
    }

    #[test]
    fn constraint_violation_message() {
        let err = ScopeError::ConstraintViolation {
            original: Scope::new("a", "x"),
            slice: SliceId::new("a"),
            conflicting: DataNetworkId::new("y"),
        };
        assert!(err.is_constraint_violation());
        assert_eq!(
            err.to_string(),
            "cannot update `a/x` to `y`: data network already exposed under slice `a`"
        );
    }
}

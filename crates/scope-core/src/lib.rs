//! Slice Scope Core
//!
//! Persistent reconciliation of network slice / data network scopes.
//!
//! # Core Concepts
//!
//! - [`Scope`]: A single (slice, data network) pairing, the unit of edits
//! - [`Collection`]: Slice groups in creation order, each exposing its data networks
//! - [`ScopeStore`]: Add / update / remove operations returning new snapshots
//! - [`flatten`]: Projection back to one [`Scope`] per configured pair
//! - [`sequence`]: Copy-on-write index helpers over persistent vectors
//!
//! # Example
//!
//! ```rust
//! use scope_core::{add_scope, flatten, update_scope, Collection, Scope};
//!
//! let config = Collection::new();
//! let config = add_scope(&config, &Scope::new("slice-1", "dn-1"));
//! let config = add_scope(&config, &Scope::new("slice-2", "dn-2"));
//!
//! // Moving the only entry out of slice-1 drops its group
//! let config = update_scope(
//!     &config,
//!     &Scope::new("slice-1", "dn-1"),
//!     &Scope::new("slice-2", "dn-1"),
//! )?;
//!
//! assert_eq!(
//!     flatten(&config),
//!     vec![Scope::new("slice-2", "dn-2"), Scope::new("slice-2", "dn-1")]
//! );
//! # Ok::<(), scope_core::ScopeError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod model;
mod projection;
pub mod sequence;
mod store;

// Re-exports
pub use error::{InvalidReason, Operation, ScopeError};
pub use model::{Collection, DataNetworkEntry, DataNetworkId, Scope, SliceGroup, SliceId};
pub use projection::{flatten, scopes};
pub use store::{add_scope, remove_scope, update_scope, ScopeStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

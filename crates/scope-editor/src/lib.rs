//! Slice Scope Editor
//!
//! Everything a scope editing front end needs around the core store,
//! without any rendering.
//!
//! # Core Concepts
//!
//! - [`ScopeCatalog`]: Selectable slices and data networks, loaded from TOML/YAML/JSON
//! - [`ScopeDraft`]: A row selection that becomes a [`Scope`](scope_core::Scope) once complete
//! - [`EditorRow`]: One row per configured scope plus a blank creation row
//! - [`EditorSession`]: Owner of the current snapshot; saves drafts through the store
//! - [`EditOp`]: Scripted edit, replayed with [`EditorSession::apply`]
//!
//! # Example
//!
//! ```rust
//! use scope_editor::{EditorSession, ScopeCatalog, ScopeDraft};
//!
//! let mut session = EditorSession::new(ScopeCatalog::default());
//!
//! // Nothing happens until both halves are chosen
//! let draft = ScopeDraft::blank().with_slice("slice-1");
//! assert_eq!(session.save_new(&draft)?, None);
//!
//! let draft = draft.with_data_network("dn-2");
//! assert!(session.save_new(&draft)?.is_some());
//! assert_eq!(session.rows().len(), 2);
//! # Ok::<(), scope_editor::EditorError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod catalog;
mod draft;
mod error;
mod format;
mod script;
mod session;

// Re-exports
pub use catalog::ScopeCatalog;
pub use draft::{editor_rows, EditorRow, ScopeDraft, CREATION_ROW_KEY};
pub use error::{ConfigError, EditorError};
pub use format::ConfigFormat;
pub use script::{load_script, parse_script, EditOp};
pub use session::EditorSession;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Context-sensitive autocompletion engine for a MongoDB playground editor
//!
//! This library powers the suggestion lists of a two-pane playground editor:
//! a "configuration" pane holding BSON documents and a "query" pane holding a
//! MongoDB-shell-like query. For every completion request it classifies the
//! grammar position under the cursor, dispatches the matching completion
//! catalogs, and, once the user picks a candidate, rewrites the buffer so the
//! inserted snippet is well-formed (quoted keys, colon placement, no
//! duplicated quotes).
//!
//! # Modules
//!
//! - `catalog`: completion entries and the six category catalogs
//! - `completion`: classifier, dispatcher, insertion editor, and the engine
//! - `editor`: tokens, the line lexer, and the session/buffer traits a
//!   hosting editor implements
//! - `error`: error types for the catalog-loading boundary
//!
//! # Example
//!
//! ```
//! use playground_completion::{CatalogSet, CompletionEngine, TextSession};
//!
//! let engine = CompletionEngine::query(CatalogSet::default());
//! let session = TextSession::from_text("db.collection.fi");
//!
//! // Cursor at the end of the partial method name
//! let candidates = engine.complete(&session, 0, 16);
//! assert_eq!(candidates[0].label, "find()");
//! ```

pub mod catalog;
pub mod completion;
pub mod editor;
pub mod error;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogSet, CompletionEntry};
pub use completion::{CompletionContext, CompletionEngine, Insertion, OperatorKind, Pane};
pub use editor::{EditableBuffer, EditorSession, TextBuffer, TextSession, Token, TokenRole};
pub use error::{CompletionError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}

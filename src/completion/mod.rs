//! Completion core: context classification, candidate dispatch, and the
//! insertion editor.
//!
//! # Architecture
//!
//! Each completion request runs a three-stage pipeline:
//!
//! - **Classifier**: decides which grammar position the cursor is filling
//! - **Dispatcher**: selects the catalogs for that position, in display order
//! - **Insertion editor**: turns the accepted entry into safe buffer edits
//!
//! All three stages are pure or direct synchronous mutations; no state is
//! kept between requests.

mod context;
mod dispatch;
mod engine;
mod insert;

pub use context::{CompletionContext, OperatorKind, Pane, classify};
pub use dispatch::dispatch;
pub use engine::CompletionEngine;
pub use insert::{Insertion, apply, build_insertion};

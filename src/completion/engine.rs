//! Completion engine - orchestrates the completion flow for one pane.
//!
//! The host runs two independent engines, one per pane, differing only in
//! pane binding and catalog set. Each request runs the same pipeline:
//! classify the cursor position, dispatch the matching catalogs, and hand the
//! ordered candidates straight back to the host's suggestion list. When the
//! user picks a candidate, [`CompletionEngine::accept`] applies the buffer
//! edits.

use tracing::debug;

use super::context::{CompletionContext, Pane, classify};
use super::dispatch::dispatch;
use super::insert;
use crate::catalog::{CatalogSet, CompletionEntry};
use crate::editor::{EditableBuffer, EditorSession, Token};

/// Pane-bound completion pipeline.
pub struct CompletionEngine {
    pane: Pane,
    catalogs: CatalogSet,
}

impl CompletionEngine {
    /// Create an engine bound to a pane with an injected catalog set.
    pub fn new(pane: Pane, catalogs: CatalogSet) -> Self {
        Self { pane, catalogs }
    }

    /// Engine for the configuration pane (scalar keywords only).
    pub fn config(catalogs: CatalogSet) -> Self {
        Self::new(Pane::Config, catalogs)
    }

    /// Engine for the query pane (keywords plus method/collection/operator
    /// catalogs).
    pub fn query(catalogs: CatalogSet) -> Self {
        Self::new(Pane::Query, catalogs)
    }

    /// The pane this engine serves.
    pub fn pane(&self) -> Pane {
        self.pane
    }

    /// The injected catalogs.
    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    /// Complete at the given cursor position.
    ///
    /// Returns the ordered candidate entries for the host's suggestion list.
    /// Context is recomputed from the session on every call; nothing carries
    /// over between requests. Prefix filtering of the returned list is the
    /// host's concern.
    pub fn complete(
        &self,
        session: &dyn EditorSession,
        row: usize,
        column: usize,
    ) -> Vec<CompletionEntry> {
        let context = self.classify_at(session, row, column);
        debug!(
            "Completion request at {}:{} classified as {:?}",
            row, column, context
        );
        dispatch(context, &self.catalogs)
    }

    /// Classify the cursor position without dispatching candidates.
    pub fn classify_at(
        &self,
        session: &dyn EditorSession,
        row: usize,
        column: usize,
    ) -> CompletionContext {
        let cursor = session.token_at(row, column);
        let tokens = session.tokens_for_row(row);
        // The probes look at the first line only: that is where the
        // `db.collection.method(` prelude of a query lives.
        let first_line = session.line_text(0);
        classify(&tokens, &cursor, &first_line, self.pane)
    }

    /// Apply an accepted entry at the cursor token.
    ///
    /// Mutates the buffer through its primitives and never fails.
    pub fn accept(&self, entry: &CompletionEntry, cursor: &Token, buffer: &mut dyn EditableBuffer) {
        insert::apply(entry, cursor, buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::context::OperatorKind;
    use crate::editor::{TextBuffer, TextSession};

    fn query_engine() -> CompletionEngine {
        CompletionEngine::query(CatalogSet::default())
    }

    #[test]
    fn test_method_position_offers_methods_only() {
        let engine = query_engine();
        let session = TextSession::from_text("db.collection.fi");

        let entries = engine.complete(&session, 0, 16);
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();

        assert_eq!(labels, vec!["find()", "aggregate()", "update()", "explain()"]);
    }

    #[test]
    fn test_collection_position_offers_collections_only() {
        let engine = query_engine();
        let session = TextSession::from_text("db.co");

        let entries = engine.complete(&session, 0, 5);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "collection");
        assert_eq!(entries[0].category, "collection name");
    }

    #[test]
    fn test_find_body_offers_keywords_then_query_operators() {
        let engine = query_engine();
        let session = TextSession::from_text("db.collection.find({\"key\": fi");

        let entries = engine.complete(&session, 0, 29);
        let keyword_count = engine.catalogs().keywords.len();

        assert_eq!(entries[0].label, "true");
        assert_eq!(entries[keyword_count].label, "$eq");
        assert!(entries.iter().any(|e| e.label == "$geoIntersects"));
        assert!(!entries.iter().any(|e| e.category == "update operator"));
    }

    #[test]
    fn test_aggregate_body_offers_aggregation_operators() {
        let engine = query_engine();
        let session = TextSession::from_text("db.orders.aggregate([{\"$lo");

        let entries = engine.complete(&session, 0, 26);

        assert!(entries.iter().any(|e| e.label == "$lookup"));
        assert!(!entries.iter().any(|e| e.label == "$geoIntersects"));
    }

    #[test]
    fn test_update_body_is_the_fallback() {
        let engine = query_engine();
        let session =
            TextSession::from_text("db.collection.update({\"key\": 2}, {\"$se");

        let entries = engine.complete(&session, 0, 38);

        assert!(entries.iter().any(|e| e.label == "$setOnInsert"));
        assert!(!entries.iter().any(|e| e.label == "$lookup"));
    }

    #[test]
    fn test_operator_body_on_later_rows_still_probes_first_line() {
        let engine = query_engine();
        let session = TextSession::from_text("db.collection.find({\n  \"key\": {fi");

        let entries = engine.complete(&session, 1, 11);

        assert!(entries.iter().any(|e| e.label == "$eq"));
    }

    #[test]
    fn test_config_pane_keywords_only_ignores_probes() {
        let engine = CompletionEngine::config(CatalogSet::default());
        // Even with .find(/.aggregate( text present, the config pane offers
        // the keyword catalog and nothing else.
        let session = TextSession::from_text("db.collection.find(.aggregate(");

        let entries = engine.complete(&session, 0, 30);
        let keyword_labels: Vec<&str> = engine
            .catalogs()
            .keywords
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();

        assert_eq!(labels, keyword_labels);
    }

    #[test]
    fn test_config_pane_empty_line() {
        let engine = CompletionEngine::config(CatalogSet::default());
        let session = TextSession::from_text("");

        let entries = engine.complete(&session, 0, 0);

        assert_eq!(entries.len(), engine.catalogs().keywords.len());
        assert!(entries.iter().all(|e| e.category == "bson keyword"));
    }

    #[test]
    fn test_classify_at_matches_complete() {
        let engine = query_engine();
        let session = TextSession::from_text("db.collection.find({");

        assert_eq!(
            engine.classify_at(&session, 0, 20),
            CompletionContext::OperatorPosition(OperatorKind::Find)
        );
    }

    #[test]
    fn test_accept_unquoted_partial_word() {
        let engine = query_engine();
        let text = "db.collection.find({\"key\": {fi}})";
        let session = TextSession::from_text(text);
        let cursor = session.token_at(0, 30);
        assert_eq!(cursor.value, "fi");

        let entry = CompletionEntry::new("$eq", "$eq: \"value\"", "comparison operator");
        let mut buffer = TextBuffer::new(text, 30);
        engine.accept(&entry, &cursor, &mut buffer);

        assert_eq!(
            buffer.text(),
            "db.collection.find({\"key\": {\"$eq\": \"value\"}})"
        );
    }

    #[test]
    fn test_accept_inside_quoted_token_consumes_closing_quote() {
        let engine = query_engine();
        let text = "db.collection.find({\"key\": {\"fi\"}})";
        let session = TextSession::from_text(text);
        // Cursor after `fi`, inside the quoted token.
        let cursor = session.token_at(0, 31);
        assert_eq!(cursor.value, "\"fi\"");

        let entry = CompletionEntry::new("$eq", "$eq: \"value\"", "comparison operator");
        let mut buffer = TextBuffer::new(text, 31);
        engine.accept(&entry, &cursor, &mut buffer);

        // Old closing quote consumed, opening quote reused, no duplicates.
        assert_eq!(
            buffer.text(),
            "db.collection.find({\"key\": {\"$eq\": \"value\"}})"
        );
    }

    #[test]
    fn test_engines_share_no_state_across_requests() {
        let engine = query_engine();
        let find_session = TextSession::from_text("db.collection.find({fi");
        let update_session = TextSession::from_text("db.collection.update({}, {fi");

        let first = engine.complete(&find_session, 0, 22);
        let _ = engine.complete(&update_session, 0, 28);
        let again = engine.complete(&find_session, 0, 22);

        assert_eq!(first, again);
    }
}

//! Completion context classification.
//!
//! The classifier decides which grammar position the cursor is filling. It
//! deliberately does not parse the query: the text is almost never a
//! complete, parseable query while it is being typed, so a real parser would
//! reject most in-progress input. Instead it keys off syntactic landmarks
//! that stay stable in incomplete text: the `db` prefix, the dot before the
//! cursor, the token count, and substring probes on the first line.

use tracing::trace;

use crate::editor::Token;

/// The two editable surfaces, each with its own catalog set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// Configuration document pane (BSON documents or generator configs)
    Config,
    /// Query pane
    Query,
}

/// Which operator catalog applies inside an operator/value slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    /// Match-query operators (`.find(` present on the first line)
    Find,
    /// Aggregation operators (`.aggregate(` present on the first line)
    Aggregate,
    /// Update operators, the default for anything else
    Update,
}

/// The classified grammatical position of the cursor.
///
/// Derived fresh on every completion request from the token stream, cursor
/// token and first line; no state carries over between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionContext {
    /// Cursor is selecting a query method name, e.g. after `db.<collection>.`
    MethodPosition,
    /// Cursor is selecting the collection identifier, e.g. after `db.`
    CollectionPosition,
    /// Cursor is inside an operator/value slot of the query body
    OperatorPosition(OperatorKind),
    /// Cursor is in the configuration pane
    ConfigPosition,
}

/// Classify the cursor position. Rules are evaluated in order, first match
/// wins, and the final rule is an explicit default, so every input is
/// classified.
///
/// The substring probes are heuristics, not a parse: a first line containing
/// `.find(` inside an `.aggregate(` sub-pipeline string still classifies as
/// `Find`. That coarseness is accepted behavior.
pub fn classify(
    tokens: &[Token],
    cursor: &Token,
    first_line: &str,
    pane: Pane,
) -> CompletionContext {
    // Configuration documents have no method/collection/operator positions.
    if pane == Pane::Config {
        return CompletionContext::ConfigPosition;
    }

    let starts_with_db = tokens.first().is_some_and(|t| t.value == "db");
    let after_dot = cursor
        .index
        .checked_sub(1)
        .and_then(|i| tokens.get(i))
        .is_some_and(Token::is_dot);

    let context = if tokens.len() > 3 && starts_with_db && after_dot {
        CompletionContext::MethodPosition
    } else if tokens.len() == 3 && starts_with_db && after_dot {
        CompletionContext::CollectionPosition
    } else if first_line.contains(".find(") {
        CompletionContext::OperatorPosition(OperatorKind::Find)
    } else if first_line.contains(".aggregate(") {
        CompletionContext::OperatorPosition(OperatorKind::Aggregate)
    } else {
        CompletionContext::OperatorPosition(OperatorKind::Update)
    };

    trace!("Classified cursor position as {:?}", context);
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{EditorSession, TextSession};

    fn classify_query(line: &str, column: usize) -> CompletionContext {
        let session = TextSession::from_text(line);
        let tokens = session.tokens_for_row(0);
        let cursor = session.token_at(0, column);
        classify(&tokens, &cursor, &session.line_text(0), Pane::Query)
    }

    #[test]
    fn test_collection_position_at_three_tokens() {
        // db . us -> exactly 3 tokens, cursor on "us", preceded by a dot
        assert_eq!(
            classify_query("db.us", 5),
            CompletionContext::CollectionPosition
        );
    }

    #[test]
    fn test_method_position_past_three_tokens() {
        // db . users . fi -> 5 tokens, cursor on "fi", preceded by a dot
        assert_eq!(
            classify_query("db.users.fi", 11),
            CompletionContext::MethodPosition
        );
    }

    #[test]
    fn test_find_line_yields_find_operators() {
        assert_eq!(
            classify_query("db.users.find({\"key\": fi", 24),
            CompletionContext::OperatorPosition(OperatorKind::Find)
        );
    }

    #[test]
    fn test_aggregate_line_yields_aggregation_operators() {
        assert_eq!(
            classify_query("db.users.aggregate([{\"$ma", 25),
            CompletionContext::OperatorPosition(OperatorKind::Aggregate)
        );
    }

    #[test]
    fn test_update_is_the_default() {
        assert_eq!(
            classify_query("db.users.update({\"key\": 2}, {\"$se", 33),
            CompletionContext::OperatorPosition(OperatorKind::Update)
        );
        // Even unrecognizable text classifies; nothing is left out.
        assert_eq!(
            classify_query("whatever", 8),
            CompletionContext::OperatorPosition(OperatorKind::Update)
        );
    }

    #[test]
    fn test_find_probe_wins_over_aggregate() {
        // First-found substring wins; a .find( inside a $lookup pipeline
        // string would match the same way.
        assert_eq!(
            classify_query("db.users.find(.aggregate(", 25),
            CompletionContext::OperatorPosition(OperatorKind::Find)
        );
    }

    #[test]
    fn test_db_prefix_without_dot_before_cursor_falls_through() {
        // db.users.find( -> cursor token is "(", preceded by "find"
        assert_eq!(
            classify_query("db.users.find(", 14),
            CompletionContext::OperatorPosition(OperatorKind::Find)
        );
    }

    #[test]
    fn test_config_pane_always_config_position() {
        let session = TextSession::from_text("db.users.find({\"key\": 1})");
        let tokens = session.tokens_for_row(0);
        let cursor = session.token_at(0, 5);

        // The config pane ignores db-prefix rules and substring probes.
        assert_eq!(
            classify(&tokens, &cursor, &session.line_text(0), Pane::Config),
            CompletionContext::ConfigPosition
        );
    }

    #[test]
    fn test_cursor_at_line_start_has_no_preceding_token() {
        assert_eq!(
            classify_query("db.us", 0),
            CompletionContext::OperatorPosition(OperatorKind::Update)
        );
    }

    #[test]
    fn test_classification_is_pure() {
        let session = TextSession::from_text("db.users.fi");
        let tokens = session.tokens_for_row(0);
        let cursor = session.token_at(0, 11);
        let line = session.line_text(0);

        let first = classify(&tokens, &cursor, &line, Pane::Query);
        let second = classify(&tokens, &cursor, &line, Pane::Query);
        assert_eq!(first, second);
    }
}

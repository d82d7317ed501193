//! Candidate dispatch: maps a classified context to the catalogs to offer.

use tracing::debug;

use super::context::{CompletionContext, OperatorKind};
use crate::catalog::{CatalogSet, CompletionEntry};

/// Select the candidate entries for a context.
///
/// Order is significant and deterministic: for operator positions the scalar
/// keyword catalog is listed first and the operator catalog appended after,
/// each in its own definition order. No deduplication is performed across
/// catalogs, even when labels collide (`$slice` appears as both a projection
/// and an update operator).
pub fn dispatch(context: CompletionContext, catalogs: &CatalogSet) -> Vec<CompletionEntry> {
    let entries = match context {
        CompletionContext::ConfigPosition => catalogs.keywords.entries().to_vec(),
        CompletionContext::MethodPosition => catalogs.methods.entries().to_vec(),
        CompletionContext::CollectionPosition => catalogs.collections.entries().to_vec(),
        CompletionContext::OperatorPosition(kind) => {
            let operators = match kind {
                OperatorKind::Find => &catalogs.query_operators,
                OperatorKind::Aggregate => &catalogs.aggregation_operators,
                OperatorKind::Update => &catalogs.update_operators,
            };
            let mut entries = catalogs.keywords.entries().to_vec();
            entries.extend(operators.iter().cloned());
            entries
        }
    };

    debug!(
        "Dispatching {} candidates for context {:?}",
        entries.len(),
        context
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn synthetic_catalogs() -> CatalogSet {
        CatalogSet {
            keywords: Catalog::new(vec![
                CompletionEntry::new("true", "true", "kw"),
                CompletionEntry::new("null", "null", "kw"),
            ]),
            query_operators: Catalog::new(vec![
                CompletionEntry::new("$eq", "$eq: \"value\"", "query"),
                CompletionEntry::new("$gt", "$gt: \"value\"", "query"),
            ]),
            aggregation_operators: Catalog::new(vec![CompletionEntry::new(
                "$match",
                "$match: { }",
                "agg",
            )]),
            update_operators: Catalog::new(vec![CompletionEntry::new(
                "$set",
                "$set: { \"field\": \"value\" }",
                "update",
            )]),
            methods: Catalog::new(vec![CompletionEntry::new("find()", "find()", "method")]),
            collections: Catalog::new(vec![CompletionEntry::new(
                "inventory",
                "inventory",
                "collection name",
            )]),
        }
    }

    #[test]
    fn test_config_position_keywords_only() {
        let catalogs = synthetic_catalogs();
        let entries = dispatch(CompletionContext::ConfigPosition, &catalogs);

        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["true", "null"]);
    }

    #[test]
    fn test_method_position_methods_only() {
        let catalogs = synthetic_catalogs();
        let entries = dispatch(CompletionContext::MethodPosition, &catalogs);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "find()");
    }

    #[test]
    fn test_collection_position_collections_only() {
        let catalogs = synthetic_catalogs();
        let entries = dispatch(CompletionContext::CollectionPosition, &catalogs);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "inventory");
    }

    #[test]
    fn test_find_position_keywords_then_query_operators() {
        let catalogs = synthetic_catalogs();
        let entries = dispatch(
            CompletionContext::OperatorPosition(OperatorKind::Find),
            &catalogs,
        );

        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["true", "null", "$eq", "$gt"]);
    }

    #[test]
    fn test_aggregate_position_keywords_then_aggregation() {
        let catalogs = synthetic_catalogs();
        let entries = dispatch(
            CompletionContext::OperatorPosition(OperatorKind::Aggregate),
            &catalogs,
        );

        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["true", "null", "$match"]);
    }

    #[test]
    fn test_update_position_keywords_then_update() {
        let catalogs = synthetic_catalogs();
        let entries = dispatch(
            CompletionContext::OperatorPosition(OperatorKind::Update),
            &catalogs,
        );

        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["true", "null", "$set"]);
    }

    #[test]
    fn test_dispatch_is_deterministic() {
        let catalogs = synthetic_catalogs();
        let context = CompletionContext::OperatorPosition(OperatorKind::Find);

        assert_eq!(dispatch(context, &catalogs), dispatch(context, &catalogs));
    }

    #[test]
    fn test_no_dedup_across_catalogs() {
        let catalogs = CatalogSet {
            keywords: Catalog::new(vec![CompletionEntry::new("$slice", "$slice: 2", "kw")]),
            update_operators: Catalog::new(vec![CompletionEntry::new(
                "$slice",
                "$slice: 2",
                "update operator",
            )]),
            ..CatalogSet::empty()
        };

        let entries = dispatch(
            CompletionContext::OperatorPosition(OperatorKind::Update),
            &catalogs,
        );
        assert_eq!(entries.len(), 2);
    }
}

use crate::label::{LabelInfo, LabelResolver};
use crate::predicate::{build_predicate_entry, PredicateEntry};
use quadview_model::{NamedNodeRef, QuadSet};
use serde::Serialize;

/// One named graph of the quad snapshot, restricted to the focus resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEntry {
    /// The graph's own label, resolved with the graph label predicates.
    pub label: LabelInfo,
    /// Forward and back-link entries, interleaved by label order.
    pub predicates: Vec<PredicateEntry>,
}

pub(crate) fn build_graph_entry(
    graph: NamedNodeRef<'_>,
    resource: NamedNodeRef<'_>,
    quads: &QuadSet,
    resolver: &LabelResolver<'_>,
    graph_resolver: &LabelResolver<'_>,
) -> GraphEntry {
    let mut entries = Vec::new();
    for predicate in quads.predicates_of_subject_in_graph(graph.into(), resource.into()) {
        entries.push(build_predicate_entry(
            predicate.as_ref(),
            resource,
            graph.into(),
            quads,
            resolver,
            false,
        ));
    }
    for predicate in quads.predicates_of_object_in_graph(graph.into(), resource.into()) {
        entries.push(build_predicate_entry(
            predicate.as_ref(),
            resource,
            graph.into(),
            quads,
            resolver,
            true,
        ));
    }
    // One combined order over both directions; on a full label tie, forward
    // entries come before back-links.
    entries.sort_by_cached_key(|entry| {
        (
            entry.predicate.sort_key(),
            entry.is_back_link,
            entry.predicate.uri.clone().unwrap_or_default(),
        )
    });

    GraphEntry {
        label: graph_resolver.resolve(graph.into()),
        predicates: entries,
    }
}

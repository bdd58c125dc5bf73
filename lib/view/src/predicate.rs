use crate::bnode::{expand_blank_node, BlankNodeEntry};
use crate::label::{LabelInfo, LabelResolver, ObjectEntry};
use quadview_model::{GraphNameRef, NamedNodeRef, QuadSet, Term};
use serde::Serialize;

/// All edges of one (predicate, direction) pair for the focus resource
/// within a single graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredicateEntry {
    pub predicate: LabelInfo,
    /// True when the focus resource is the *object* of these edges.
    pub is_back_link: bool,
    pub objects: Vec<ObjectEntry>,
    pub blank_nodes: Vec<BlankNodeEntry>,
    pub object_count: usize,
    pub blank_node_count: usize,
}

/// Builds the entry for a predicate already known to connect `resource`
/// within `graph` in the given direction.
pub(crate) fn build_predicate_entry(
    predicate: NamedNodeRef<'_>,
    resource: NamedNodeRef<'_>,
    graph: GraphNameRef<'_>,
    quads: &QuadSet,
    resolver: &LabelResolver<'_>,
    is_back_link: bool,
) -> PredicateEntry {
    let terms: Vec<Term> = if is_back_link {
        quads
            .subjects_in_graph(graph, predicate, resource.into())
            .into_iter()
            .map(Term::from)
            .collect()
    } else {
        quads.objects_in_graph(graph, resource.into(), predicate)
    };

    let mut objects = Vec::new();
    let mut blank_nodes = Vec::new();
    for term in terms {
        match &term {
            Term::BlankNode(bnode) => {
                let entry = expand_blank_node(bnode.as_ref(), quads, resolver);
                blank_nodes.push((entry, term.to_string()));
            }
            Term::NamedNode(_) | Term::Literal(_) => {
                objects.push((resolver.resolve(term.as_ref()), term.to_string()));
            }
        }
    }
    objects.sort_by_cached_key(|(entry, canonical)| (entry.sort_key(), canonical.clone()));
    blank_nodes.sort_by_cached_key(|(entry, canonical)| (entry.info.sort_key(), canonical.clone()));

    let objects: Vec<ObjectEntry> = objects.into_iter().map(|(entry, _)| entry).collect();
    let blank_nodes: Vec<BlankNodeEntry> =
        blank_nodes.into_iter().map(|(entry, _)| entry).collect();
    let object_count = objects.len();
    let blank_node_count = blank_nodes.len();

    PredicateEntry {
        predicate: resolver.resolve(predicate.into()),
        is_back_link,
        objects,
        blank_nodes,
        object_count,
        blank_node_count,
    }
}

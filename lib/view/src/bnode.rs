use crate::label::{LabelInfo, LabelResolver, ObjectEntry};
use quadview_model::{BlankNodeRef, QuadSet};
use serde::Serialize;

/// One outgoing predicate of an inlined blank node, with its objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlankNodeItem {
    pub predicate: LabelInfo,
    pub objects: Vec<ObjectEntry>,
}

/// A blank node inlined at its point of reference.
///
/// Blank nodes have no external identity, so instead of linking to them the
/// tree materializes their outgoing edges in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlankNodeEntry {
    /// Self-label; degenerates to the synthetic blank node id.
    pub info: LabelInfo,
    pub items: Vec<BlankNodeItem>,
}

/// Materializes the outgoing edges of a blank node, exactly one level deep.
///
/// A blank object of a blank node is not expanded further; it surfaces under
/// its synthetic id label. The fixed depth also means cyclic blank node
/// structures cannot make the expansion loop, so no visited-set is kept.
pub(crate) fn expand_blank_node(
    bnode: BlankNodeRef<'_>,
    quads: &QuadSet,
    resolver: &LabelResolver<'_>,
) -> BlankNodeEntry {
    let mut items = Vec::new();
    for predicate in quads.predicates_for_subject(bnode.into()) {
        let mut objects: Vec<(ObjectEntry, String)> = quads
            .objects(bnode.into(), predicate.as_ref())
            .into_iter()
            .map(|term| (resolver.resolve(term.as_ref()), term.to_string()))
            .collect();
        objects.sort_by_cached_key(|(entry, canonical)| (entry.sort_key(), canonical.clone()));

        let item = BlankNodeItem {
            predicate: resolver.resolve(predicate.as_ref().into()),
            objects: objects.into_iter().map(|(entry, _)| entry).collect(),
        };
        items.push((item, predicate.into_string()));
    }
    items.sort_by_cached_key(|(item, iri)| (item.predicate.sort_key(), iri.clone()));

    BlankNodeEntry {
        info: resolver.resolve(bnode.into()),
        items: items.into_iter().map(|(item, _)| item).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::UrlRewriter;
    use quadview_model::vocab::rdfs;
    use quadview_model::{BlankNode, Literal, NamedNode, Quad};

    #[test]
    fn expansion_stops_after_one_level() {
        let graph = NamedNode::new_unchecked("http://ex.org/g");
        let outer = BlankNode::new_unchecked("outer");
        let inner = BlankNode::new_unchecked("inner");
        let has_part = NamedNode::new_unchecked("http://ex.org/hasPart");
        let quads = QuadSet::new([
            Quad::new(
                outer.clone(),
                has_part.clone(),
                inner.clone(),
                graph.clone(),
            ),
            Quad::new(
                inner.clone(),
                has_part.clone(),
                Literal::new_simple_literal("nested value"),
                graph,
            ),
        ]);
        let predicates = vec![rdfs::LABEL.into_owned()];
        let rewriter = UrlRewriter::new("http://ex.org/", "http://browse.example.org/");
        let resolver = LabelResolver::new(&quads, &predicates, &rewriter);

        let entry = expand_blank_node(outer.as_ref(), &quads, &resolver);
        assert_eq!(entry.info.labels, vec!["outer"]);
        assert_eq!(entry.items.len(), 1);
        // The nested blank node is shown by id only, never expanded.
        assert_eq!(entry.items[0].objects.len(), 1);
        assert_eq!(entry.items[0].objects[0].labels, vec!["inner"]);
    }

    #[test]
    fn objects_sort_by_joined_label() {
        let graph = NamedNode::new_unchecked("http://ex.org/g");
        let bnode = BlankNode::new_unchecked("b0");
        let value = NamedNode::new_unchecked("http://ex.org/value");
        let quads = QuadSet::new([
            Quad::new(
                bnode.clone(),
                value.clone(),
                Literal::new_simple_literal("zeta"),
                graph.clone(),
            ),
            Quad::new(
                bnode.clone(),
                value.clone(),
                Literal::new_simple_literal("alpha"),
                graph,
            ),
        ]);
        let predicates = vec![rdfs::LABEL.into_owned()];
        let rewriter = UrlRewriter::new("http://ex.org/", "http://browse.example.org/");
        let resolver = LabelResolver::new(&quads, &predicates, &rewriter);

        let entry = expand_blank_node(bnode.as_ref(), &quads, &resolver);
        let labels: Vec<_> = entry.items[0]
            .objects
            .iter()
            .map(|o| o.labels[0].as_str())
            .collect();
        assert_eq!(labels, vec!["alpha", "zeta"]);
    }
}

use crate::rewrite::UrlRewriter;
use quadview_model::{NamedNode, QuadSet, Term, TermRef};
use serde::Serialize;
use std::collections::BTreeSet;

/// The resolved display form of a term.
///
/// `labels` is never empty: when no label literal exists for a term, it
/// degenerates to the term's own lexical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelInfo {
    /// The externally browsable IRI of the term, if it has one.
    pub uri: Option<String>,
    /// All label strings found for the term, deduplicated by value and
    /// sorted ascending.
    pub labels: Vec<String>,
}

impl LabelInfo {
    /// The joined-label sort key every ordering decision in the tree uses.
    /// Plain byte order over the concatenated label strings, deliberately
    /// not locale-aware.
    pub fn sort_key(&self) -> String {
        self.labels.concat()
    }
}

/// An object or subject reached via a predicate, in display form.
pub type ObjectEntry = LabelInfo;

/// Finds preferred human-readable labels for terms within one quad snapshot.
pub struct LabelResolver<'a> {
    quads: &'a QuadSet,
    label_predicates: &'a [NamedNode],
    rewriter: &'a UrlRewriter,
}

impl<'a> LabelResolver<'a> {
    pub fn new(
        quads: &'a QuadSet,
        label_predicates: &'a [NamedNode],
        rewriter: &'a UrlRewriter,
    ) -> Self {
        Self {
            quads,
            label_predicates,
            rewriter,
        }
    }

    /// Resolves the display form of `term`.
    ///
    /// Literals display as their value, blank nodes as their synthetic id.
    /// For IRIs, label literals are collected across all configured label
    /// predicates and all graphs; the fallback label is the internal
    /// (un-rewritten) IRI so it matches what the dataset actually contains.
    pub fn resolve(&self, term: TermRef<'_>) -> LabelInfo {
        match term {
            TermRef::Literal(literal) => LabelInfo {
                uri: None,
                labels: vec![literal.value().to_owned()],
            },
            TermRef::BlankNode(bnode) => LabelInfo {
                uri: None,
                labels: vec![bnode.as_str().to_owned()],
            },
            TermRef::NamedNode(node) => {
                let mut labels = BTreeSet::new();
                for predicate in self.label_predicates {
                    for object in self.quads.objects(node.into(), predicate.as_ref()) {
                        if let Term::Literal(literal) = object {
                            if !literal.value().is_empty() {
                                labels.insert(literal.value().to_owned());
                            }
                        }
                    }
                }
                let labels = if labels.is_empty() {
                    vec![node.as_str().to_owned()]
                } else {
                    labels.into_iter().collect()
                };
                LabelInfo {
                    uri: Some(self.rewriter.rewrite(node.as_str())),
                    labels,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadview_model::vocab::{rdfs, skos};
    use quadview_model::{BlankNode, Literal, NamedNode, Quad};

    fn graph() -> NamedNode {
        NamedNode::new_unchecked("http://ex.org/g")
    }

    fn label_quad(subject: &NamedNode, label: &str) -> Quad {
        Quad::new(
            subject.clone(),
            rdfs::LABEL.into_owned(),
            Literal::new_simple_literal(label),
            graph(),
        )
    }

    fn resolver_fixture(quads: QuadSet) -> (QuadSet, Vec<NamedNode>, UrlRewriter) {
        let predicates = vec![rdfs::LABEL.into_owned(), skos::PREF_LABEL.into_owned()];
        let rewriter = UrlRewriter::new("http://ex.org/", "http://browse.example.org/");
        (quads, predicates, rewriter)
    }

    #[test]
    fn labels_are_collected_across_all_label_predicates() {
        let item = NamedNode::new_unchecked("http://ex.org/item");
        let (quads, predicates, rewriter) = resolver_fixture(QuadSet::new([
            label_quad(&item, "Beta"),
            Quad::new(
                item.clone(),
                skos::PREF_LABEL.into_owned(),
                Literal::new_simple_literal("Alpha"),
                graph(),
            ),
        ]));
        let resolver = LabelResolver::new(&quads, &predicates, &rewriter);

        let info = resolver.resolve(item.as_ref().into());
        assert_eq!(info.labels, vec!["Alpha", "Beta"]);
        assert_eq!(info.uri.as_deref(), Some("http://browse.example.org/item"));
    }

    #[test]
    fn duplicate_and_empty_labels_are_dropped() {
        let item = NamedNode::new_unchecked("http://ex.org/item");
        let (quads, predicates, rewriter) = resolver_fixture(QuadSet::new([
            label_quad(&item, "Alpha"),
            label_quad(&item, ""),
            Quad::new(
                item.clone(),
                skos::PREF_LABEL.into_owned(),
                Literal::new_simple_literal("Alpha"),
                graph(),
            ),
        ]));
        let resolver = LabelResolver::new(&quads, &predicates, &rewriter);

        assert_eq!(resolver.resolve(item.as_ref().into()).labels, vec!["Alpha"]);
    }

    #[test]
    fn unlabeled_iri_falls_back_to_its_internal_form() {
        let item = NamedNode::new_unchecked("http://ex.org/item");
        let (quads, predicates, rewriter) = resolver_fixture(QuadSet::new([]));
        let resolver = LabelResolver::new(&quads, &predicates, &rewriter);

        let info = resolver.resolve(item.as_ref().into());
        assert_eq!(info.labels, vec!["http://ex.org/item"]);
        assert_eq!(info.uri.as_deref(), Some("http://browse.example.org/item"));
    }

    #[test]
    fn literal_and_blank_node_labels_are_never_empty() {
        let (quads, predicates, rewriter) = resolver_fixture(QuadSet::new([]));
        let resolver = LabelResolver::new(&quads, &predicates, &rewriter);

        let literal = Literal::new_language_tagged_literal_unchecked("wert", "de");
        let info = resolver.resolve(literal.as_ref().into());
        assert_eq!(info.labels, vec!["wert"]);
        assert_eq!(info.uri, None);

        let bnode = BlankNode::new_unchecked("b0");
        let info = resolver.resolve(bnode.as_ref().into());
        assert_eq!(info.labels, vec!["b0"]);
        assert_eq!(info.uri, None);
    }
}

use oxrdf::{GraphName, GraphNameRef, NamedNode, NamedNodeRef, Quad, Subject, SubjectRef, Term, TermRef};
use std::fmt::Display;

/// A flat, immutable collection of quads with set semantics.
///
/// The backing vector is deduplicated and held in a canonical order derived
/// from the string form of each quad, so every scan over a [QuadSet] is
/// independent of the order in which the quads were supplied and of any hash
/// iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuadSet {
    quads: Vec<Quad>,
}

impl QuadSet {
    pub fn new(quads: impl IntoIterator<Item = Quad>) -> Self {
        let mut quads: Vec<Quad> = quads.into_iter().collect();
        quads.sort_by_cached_key(quad_key);
        quads.dedup();
        Self { quads }
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quad> {
        self.quads.iter()
    }

    /// The distinct graph names occurring in the set, including blank and
    /// default graphs. Filtering out unnamed graphs is the caller's concern.
    pub fn graph_names(&self) -> Vec<GraphName> {
        distinct(self.quads.iter().map(|q| q.graph_name.clone()).collect())
    }

    /// The distinct objects of `(subject, predicate, ?o)` across all graphs.
    pub fn objects(&self, subject: SubjectRef<'_>, predicate: NamedNodeRef<'_>) -> Vec<Term> {
        distinct(
            self.quads
                .iter()
                .filter(|q| q.subject.as_ref() == subject && q.predicate.as_ref() == predicate)
                .map(|q| q.object.clone())
                .collect(),
        )
    }

    /// The distinct predicates for which `subject` has an outgoing edge,
    /// across all graphs.
    pub fn predicates_for_subject(&self, subject: SubjectRef<'_>) -> Vec<NamedNode> {
        distinct(
            self.quads
                .iter()
                .filter(|q| q.subject.as_ref() == subject)
                .map(|q| q.predicate.clone())
                .collect(),
        )
    }

    /// The distinct objects of `(subject, predicate, ?o)` within one graph.
    pub fn objects_in_graph(
        &self,
        graph: GraphNameRef<'_>,
        subject: SubjectRef<'_>,
        predicate: NamedNodeRef<'_>,
    ) -> Vec<Term> {
        distinct(
            self.quads
                .iter()
                .filter(|q| {
                    q.graph_name.as_ref() == graph
                        && q.subject.as_ref() == subject
                        && q.predicate.as_ref() == predicate
                })
                .map(|q| q.object.clone())
                .collect(),
        )
    }

    /// The distinct subjects of `(?s, predicate, object)` within one graph.
    pub fn subjects_in_graph(
        &self,
        graph: GraphNameRef<'_>,
        predicate: NamedNodeRef<'_>,
        object: TermRef<'_>,
    ) -> Vec<Subject> {
        distinct(
            self.quads
                .iter()
                .filter(|q| {
                    q.graph_name.as_ref() == graph
                        && q.predicate.as_ref() == predicate
                        && q.object.as_ref() == object
                })
                .map(|q| q.subject.clone())
                .collect(),
        )
    }

    /// The distinct predicates for which `subject` has an outgoing edge
    /// within one graph.
    pub fn predicates_of_subject_in_graph(
        &self,
        graph: GraphNameRef<'_>,
        subject: SubjectRef<'_>,
    ) -> Vec<NamedNode> {
        distinct(
            self.quads
                .iter()
                .filter(|q| q.graph_name.as_ref() == graph && q.subject.as_ref() == subject)
                .map(|q| q.predicate.clone())
                .collect(),
        )
    }

    /// The distinct predicates for which `object` has an incoming edge
    /// within one graph.
    pub fn predicates_of_object_in_graph(
        &self,
        graph: GraphNameRef<'_>,
        object: TermRef<'_>,
    ) -> Vec<NamedNode> {
        distinct(
            self.quads
                .iter()
                .filter(|q| q.graph_name.as_ref() == graph && q.object.as_ref() == object)
                .map(|q| q.predicate.clone())
                .collect(),
        )
    }
}

impl FromIterator<Quad> for QuadSet {
    fn from_iter<T: IntoIterator<Item = Quad>>(iter: T) -> Self {
        Self::new(iter)
    }
}

fn quad_key(quad: &Quad) -> String {
    format!(
        "{} {} {} {}",
        quad.graph_name, quad.subject, quad.predicate, quad.object
    )
}

fn distinct<T: Display + PartialEq>(mut values: Vec<T>) -> Vec<T> {
    values.sort_by_cached_key(ToString::to_string);
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{Literal, NamedNode};

    fn node(iri: &str) -> NamedNode {
        NamedNode::new_unchecked(iri)
    }

    fn quad(s: &str, p: &str, o: &str, g: &str) -> Quad {
        Quad::new(node(s), node(p), node(o), node(g))
    }

    #[test]
    fn construction_is_input_order_independent() {
        let a = quad("http://ex.org/a", "http://ex.org/p", "http://ex.org/b", "http://ex.org/g");
        let b = quad("http://ex.org/b", "http://ex.org/p", "http://ex.org/c", "http://ex.org/g");
        let c = quad("http://ex.org/c", "http://ex.org/q", "http://ex.org/a", "http://ex.org/h");

        let forward = QuadSet::new([a.clone(), b.clone(), c.clone()]);
        let backward = QuadSet::new([c, b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn duplicate_quads_collapse() {
        let a = quad("http://ex.org/a", "http://ex.org/p", "http://ex.org/b", "http://ex.org/g");
        let set = QuadSet::new([a.clone(), a.clone(), a]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn cross_graph_projections_are_distinct() {
        let s = node("http://ex.org/a");
        let p = node("http://ex.org/p");
        let o = Term::from(Literal::new_simple_literal("v"));
        let set = QuadSet::new([
            Quad::new(s.clone(), p.clone(), o.clone(), node("http://ex.org/g1")),
            Quad::new(s.clone(), p.clone(), o.clone(), node("http://ex.org/g2")),
        ]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.objects(s.as_ref().into(), p.as_ref()), vec![o]);
        assert_eq!(
            set.predicates_for_subject(s.as_ref().into()),
            vec![p]
        );
    }
}

use quadview_model::vocab::{dcterms, rdfs, skos};
use quadview_model::NamedNode;
use std::collections::BTreeSet;

/// Configuration of the presentation-tree transform.
///
/// Threaded explicitly into every entry point instead of living in ambient
/// process state, so synthetic configs can drive the transform in tests.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// IRI prefix under which the dataset mints its identifiers.
    pub dataset_base: String,
    /// IRI prefix under which the browser serves those identifiers.
    pub external_base: String,
    /// Predicates that carry human-readable labels for resources, in
    /// priority order.
    pub label_predicates: Vec<NamedNode>,
    /// Predicates that carry labels for named graphs. Datasets usually label
    /// their graphs with a different vocabulary than their resources.
    pub graph_label_predicates: Vec<NamedNode>,
    /// Graphs the operator flagged as sensitive. Passed through to the
    /// presentation layer untouched; the transform never filters on them.
    pub excluded_graph_uris: BTreeSet<NamedNode>,
}

impl ViewConfig {
    pub fn new(dataset_base: impl Into<String>, external_base: impl Into<String>) -> Self {
        Self {
            dataset_base: dataset_base.into(),
            external_base: external_base.into(),
            label_predicates: default_label_predicates(),
            graph_label_predicates: default_graph_label_predicates(),
            excluded_graph_uris: BTreeSet::new(),
        }
    }
}

pub fn default_label_predicates() -> Vec<NamedNode> {
    vec![rdfs::LABEL.into_owned()]
}

pub fn default_graph_label_predicates() -> Vec<NamedNode> {
    vec![
        dcterms::TITLE.into_owned(),
        rdfs::LABEL.into_owned(),
        skos::PREF_LABEL.into_owned(),
    ]
}

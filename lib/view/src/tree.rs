use crate::config::ViewConfig;
use crate::error::ViewError;
use crate::graph::{build_graph_entry, GraphEntry};
use crate::label::{LabelInfo, LabelResolver};
use crate::rewrite::UrlRewriter;
use quadview_model::{GraphName, NamedNode, QuadSet};
use serde::Serialize;
use std::collections::BTreeSet;

/// The fully assembled Graph → Predicate → Object tree for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationTree {
    pub resource_label: LabelInfo,
    /// The focus IRI as requested, before any rewriting.
    pub resource_uri: String,
    pub graphs: Vec<GraphEntry>,
    /// Operator-flagged sensitive graphs, passed through untouched for the
    /// presentation layer to filter or flag.
    pub excluded_graph_uris: BTreeSet<String>,
}

/// Builds the presentation tree for `resource_iri` from one quad snapshot.
///
/// Fails with [ViewError::MalformedResourceIdentifier] before looking at any
/// quads when the focus IRI does not parse, and with
/// [ViewError::NoDataForResource] when the snapshot is empty. No partial
/// tree is ever returned.
pub fn build_tree(
    quads: &QuadSet,
    resource_iri: &str,
    config: &ViewConfig,
) -> Result<PresentationTree, ViewError> {
    let resource = NamedNode::new(resource_iri)?;
    if quads.is_empty() {
        return Err(ViewError::NoDataForResource(resource.into_string()));
    }

    let rewriter = UrlRewriter::new(&config.dataset_base, &config.external_base);
    let resolver = LabelResolver::new(quads, &config.label_predicates, &rewriter);
    let graph_resolver = LabelResolver::new(quads, &config.graph_label_predicates, &rewriter);

    let mut graphs = Vec::new();
    for graph_name in quads.graph_names() {
        // Graphs must be named. Quads in blank node graphs or in the default
        // graph have no browsable identity and are dropped here.
        if let GraphName::NamedNode(graph) = graph_name {
            let entry = build_graph_entry(
                graph.as_ref(),
                resource.as_ref(),
                quads,
                &resolver,
                &graph_resolver,
            );
            graphs.push((entry, graph.into_string()));
        }
    }
    graphs.sort_by_cached_key(|(entry, iri)| (entry.label.sort_key(), iri.clone()));

    Ok(PresentationTree {
        resource_label: resolver.resolve(resource.as_ref().into()),
        resource_uri: resource.into_string(),
        graphs: graphs.into_iter().map(|(entry, _)| entry).collect(),
        excluded_graph_uris: config
            .excluded_graph_uris
            .iter()
            .map(|graph| graph.as_str().to_owned())
            .collect(),
    })
}

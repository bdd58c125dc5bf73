//! Turns the RDF neighborhood of a single resource into a deterministic,
//! fully-labeled presentation tree.
//!
//! The input is a [QuadSet](quadview_model::QuadSet) snapshot spanning
//! multiple named graphs; the output is an ordered Graph → Predicate →
//! Object tree with resolved human-readable labels, inlined blank nodes and
//! forward/back-link distinction. The transform performs no I/O, holds no
//! shared state and always produces byte-identical output for the same quad
//! set, regardless of input order.

mod bnode;
mod config;
mod error;
mod graph;
mod label;
mod predicate;
mod rewrite;
mod tree;

pub use bnode::{BlankNodeEntry, BlankNodeItem};
pub use config::{default_graph_label_predicates, default_label_predicates, ViewConfig};
pub use error::ViewError;
pub use graph::GraphEntry;
pub use label::{LabelInfo, LabelResolver, ObjectEntry};
pub use predicate::PredicateEntry;
pub use rewrite::UrlRewriter;
pub use tree::{build_tree, PresentationTree};

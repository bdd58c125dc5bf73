use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "quadview")]
/// quadview linked-data browser and SPARQL proxy server
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the quadview HTTP server
    Serve {
        /// Host and port to listen to
        #[arg(short, long, default_value = "127.0.0.1:8003", value_hint = ValueHint::Hostname)]
        bind: String,
        /// URL of the SPARQL query endpoint
        #[arg(long, value_hint = ValueHint::Url)]
        endpoint: String,
        /// IRI prefix under which the dataset mints its identifiers
        #[arg(long, value_hint = ValueHint::Url)]
        dataset_base: String,
        /// IRI prefix under which this server republishes those identifiers
        #[arg(long, value_hint = ValueHint::Url)]
        external_base: String,
        /// Predicate carrying resource labels, in priority order
        ///
        /// Can be repeated. Defaults to rdfs:label.
        #[arg(long, value_hint = ValueHint::Url)]
        label_predicate: Vec<String>,
        /// Predicate carrying named-graph labels, in priority order
        ///
        /// Can be repeated. Defaults to dcterms:title, rdfs:label and
        /// skos:prefLabel.
        #[arg(long, value_hint = ValueHint::Url)]
        graph_label_predicate: Vec<String>,
        /// Graph to flag as sensitive content
        ///
        /// Can be repeated. Flagged graphs are still served; the flag is
        /// passed on to the presentation layer.
        #[arg(long, value_hint = ValueHint::Url)]
        excluded_graph: Vec<String>,
        /// File containing the resource query template
        ///
        /// The template's $resource placeholder is replaced with the focus
        /// IRI. By default a generic neighborhood CONSTRUCT query is used.
        #[arg(long, value_hint = ValueHint::FilePath)]
        query_file: Option<PathBuf>,
        /// File containing the cluster query template
        ///
        /// Without it, cluster lookups answer "not found".
        #[arg(long, value_hint = ValueHint::FilePath)]
        cluster_query_file: Option<PathBuf>,
        /// Seconds a query may take before it lands in the slow-query log
        #[arg(long, default_value_t = 1.0)]
        slow_query_threshold: f64,
        /// Allows cross-origin requests
        #[arg(long)]
        cors: bool,
    },
}

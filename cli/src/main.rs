use crate::cli::{Args, Command};
use anyhow::{bail, Context};
use clap::Parser;
use quadview_client::ClientConfig;
use quadview_model::NamedNode;
use quadview_view::ViewConfig;
use quadview_web::ServerConfig;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = Args::parse();
    match matches.command {
        Command::Serve {
            bind,
            endpoint,
            dataset_base,
            external_base,
            label_predicate,
            graph_label_predicate,
            excluded_graph,
            query_file,
            cluster_query_file,
            slow_query_threshold,
            cors,
        } => {
            let mut view = ViewConfig::new(dataset_base, external_base);
            if !label_predicate.is_empty() {
                view.label_predicates = parse_predicates(&label_predicate)?;
            }
            if !graph_label_predicate.is_empty() {
                view.graph_label_predicates = parse_predicates(&graph_label_predicate)?;
            }
            view.excluded_graph_uris = excluded_graph
                .iter()
                .map(|iri| {
                    NamedNode::new(iri).with_context(|| format!("Invalid excluded graph IRI {iri}"))
                })
                .collect::<anyhow::Result<BTreeSet<_>>>()?;

            let mut client = ClientConfig::new(endpoint);
            if let Some(path) = query_file {
                client.query_template = read_template(&path)?;
            }
            if let Some(path) = cluster_query_file {
                client.cluster_query_template = Some(read_template(&path)?);
            }
            client.slow_query_threshold = parse_threshold(slow_query_threshold)?;

            tracing::info!(
                version = env!("CARGO_PKG_VERSION"),
                bind = %bind,
                endpoint = %client.endpoint,
                "starting quadview server"
            );

            quadview_web::serve(ServerConfig {
                bind,
                cors,
                view,
                client,
            })
            .await
        }
    }
}

fn parse_predicates(iris: &[String]) -> anyhow::Result<Vec<NamedNode>> {
    iris.iter()
        .map(|iri| {
            NamedNode::new(iri).with_context(|| format!("Invalid label predicate IRI {iri}"))
        })
        .collect()
}

/// [Duration::from_secs_f64] panics on negative and non-finite input, so
/// both are rejected up front.
fn parse_threshold(secs: f64) -> anyhow::Result<Duration> {
    if !secs.is_finite() || secs.is_sign_negative() {
        bail!("The slow query threshold must be a finite, non-negative number of seconds");
    }
    Ok(Duration::from_secs_f64(secs))
}

fn read_template(path: &Path) -> anyhow::Result<String> {
    let template = fs::read_to_string(path)
        .with_context(|| format!("Cannot read query template {}", path.display()))?;
    if !template.contains("$resource") {
        bail!(
            "The query template {} has no $resource placeholder",
            path.display()
        );
    }
    Ok(template)
}

//! Client for the query endpoint that supplies quad snapshots.
//!
//! The transform core never performs I/O; this crate is the collaborator
//! that issues the configured parameterized query against a SPARQL HTTP
//! endpoint and either parses the answer into a
//! [QuadSet](quadview_model::QuadSet) or relays the endpoint's own
//! serialization verbatim.

mod error;

pub use error::ClientError;

use oxrdfio::{RdfFormat, RdfParseError, RdfParser};
use quadview_model::{NamedNode, Quad, QuadSet};
use reqwest::header::ACCEPT;
use std::time::{Duration, Instant};

/// The default neighborhood query: everything the resource links to or is
/// linked from, per named graph, plus the labels needed to render it.
/// `$resource` is replaced verbatim with the focus IRI.
pub const DEFAULT_QUERY: &str = r"
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

CONSTRUCT {
  GRAPH ?graph {
    ?s ?p ?o .
    ?o ?p_blank ?o_blank .
  }
  ?s rdfs:label ?s_label .
  ?p rdfs:label ?p_label .
  ?o rdfs:label ?o_label .
  ?graph rdfs:label ?graph_label .
} WHERE {
  {
    GRAPH ?graph {
      ?s ?p ?o . FILTER(?s = <$resource>)
      OPTIONAL { ?o ?p_blank ?o_blank FILTER isBlank(?o) }
    }
    OPTIONAL { ?graph rdfs:label ?graph_label }
    OPTIONAL { ?o rdfs:label ?o_label }
    OPTIONAL { ?p rdfs:label ?p_label }
  }
  UNION
  {
    GRAPH ?graph {
      ?s ?p ?o . FILTER(?o = <$resource>)
    }
    OPTIONAL { ?graph rdfs:label ?graph_label }
    OPTIONAL { ?s rdfs:label ?s_label }
    OPTIONAL { ?p rdfs:label ?p_label }
  }
}
";

/// Which query template a lookup uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Resource,
    Cluster,
}

/// Configuration of the endpoint client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL of the SPARQL query endpoint.
    pub endpoint: String,
    /// Query template for plain resource lookups.
    pub query_template: String,
    /// Optional template for cluster lookups.
    pub cluster_query_template: Option<String>,
    /// Queries slower than this are logged on the `slow_query` target.
    pub slow_query_threshold: Duration,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            query_template: DEFAULT_QUERY.to_owned(),
            cluster_query_template: None,
            slow_query_threshold: Duration::from_secs(1),
        }
    }
}

/// A SPARQL HTTP endpoint client.
#[derive(Debug, Clone)]
pub struct SparqlClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SparqlClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetches the quad neighborhood of `resource_iri` and materializes it
    /// as a [QuadSet]. An empty answer is [ClientError::NoDataForResource].
    pub async fn fetch_quads(
        &self,
        kind: QueryKind,
        resource_iri: &str,
    ) -> Result<QuadSet, ClientError> {
        let query = self.render_query(kind, resource_iri)?;
        let body = self.fetch(&query, RdfFormat::NQuads.media_type()).await?;

        let quads: Result<Vec<Quad>, _> = RdfParser::from_format(RdfFormat::NQuads)
            .for_slice(&body)
            .collect();
        let quads: QuadSet = quads.map_err(RdfParseError::from)?.into_iter().collect();
        if quads.is_empty() {
            return Err(ClientError::NoDataForResource(resource_iri.to_owned()));
        }
        Ok(quads)
    }

    /// Fetches the neighborhood in the endpoint's own serialization and
    /// returns the body untouched. Used for the raw RDF output modes.
    pub async fn fetch_serialized(
        &self,
        kind: QueryKind,
        resource_iri: &str,
        media_type: &str,
    ) -> Result<Vec<u8>, ClientError> {
        let query = self.render_query(kind, resource_iri)?;
        let body = self.fetch(&query, media_type).await?;
        if body.is_empty() {
            return Err(ClientError::NoDataForResource(resource_iri.to_owned()));
        }
        Ok(body)
    }

    fn render_query(&self, kind: QueryKind, resource_iri: &str) -> Result<String, ClientError> {
        // Validate before anything leaves the process; the substitution is
        // verbatim, so a broken IRI must never reach the endpoint.
        let resource = NamedNode::new(resource_iri)?;
        let template = match kind {
            QueryKind::Resource => &self.config.query_template,
            QueryKind::Cluster => self
                .config
                .cluster_query_template
                .as_ref()
                .ok_or(ClientError::ClusterQueryNotConfigured)?,
        };
        Ok(template.replace("$resource", resource.as_str()))
    }

    async fn fetch(&self, query: &str, accept: &str) -> Result<Vec<u8>, ClientError> {
        let started = Instant::now();
        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[("query", query)])
            .header(ACCEPT, accept)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;

        let elapsed = started.elapsed();
        if elapsed > self.config.slow_query_threshold {
            tracing::warn!(
                target: "slow_query",
                elapsed_secs = elapsed.as_secs_f64(),
                endpoint = %self.config.endpoint,
                "slow SPARQL query"
            );
        }
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_rendering_substitutes_the_resource() {
        let mut config = ClientConfig::new("http://localhost:3030/ds");
        config.query_template = "DESCRIBE <$resource>".to_owned();
        let client = SparqlClient::new(config);

        let query = client
            .render_query(QueryKind::Resource, "http://ex.org/A")
            .unwrap();
        assert_eq!(query, "DESCRIBE <http://ex.org/A>");
    }

    #[test]
    fn malformed_resource_is_rejected_before_any_request() {
        let client = SparqlClient::new(ClientConfig::new("http://localhost:3030/ds"));
        let err = client
            .render_query(QueryKind::Resource, "not a uri")
            .unwrap_err();
        assert!(matches!(err, ClientError::MalformedResourceIdentifier(_)));
    }

    #[test]
    fn cluster_lookup_requires_a_configured_template() {
        let client = SparqlClient::new(ClientConfig::new("http://localhost:3030/ds"));
        let err = client
            .render_query(QueryKind::Cluster, "http://ex.org/A")
            .unwrap_err();
        assert!(matches!(err, ClientError::ClusterQueryNotConfigured));
    }
}

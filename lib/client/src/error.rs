use oxrdfio::RdfParseError;
use quadview_model::IriParseError;

/// An error raised while talking to the SPARQL endpoint.
///
/// `NoDataForResource` and `UpstreamUnavailable` are deliberately distinct:
/// the first will not change on retry, the second might.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The focus IRI fails basic IRI syntax checks. Raised before any
    /// request leaves the process.
    #[error("malformed resource identifier: {0}")]
    MalformedResourceIdentifier(#[from] IriParseError),
    /// The endpoint answered, but with zero quads for the resource.
    #[error("no data for resource <{0}>")]
    NoDataForResource(String),
    /// The endpoint could not be reached or returned an error status.
    #[error("SPARQL endpoint unavailable: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),
    /// The endpoint returned a body that does not parse as RDF.
    #[error("SPARQL endpoint returned unparseable data: {0}")]
    Parse(#[from] RdfParseError),
    /// A cluster lookup was requested but no cluster query is configured.
    #[error("no cluster query is configured")]
    ClusterQueryNotConfigured,
}

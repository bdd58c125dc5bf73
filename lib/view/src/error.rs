use quadview_model::IriParseError;

/// An error raised while building a presentation tree.
///
/// Both variants abort construction before any part of the tree is
/// assembled; a partial tree is never returned. A missing label is not an
/// error (the resolver falls back to the term's own lexical form).
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The focus IRI fails basic IRI syntax checks. Raised before any quads
    /// are inspected and not retryable.
    #[error("malformed resource identifier: {0}")]
    MalformedResourceIdentifier(#[from] IriParseError),
    /// The quad source returned zero quads for the resource. The boundary
    /// layer maps this to a "not found" response.
    #[error("no data for resource <{0}>")]
    NoDataForResource(String),
}

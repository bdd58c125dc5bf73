//! Vocabulary constants used for label resolution.
//!
//! The RDF/RDFS/XSD namespaces come from oxrdf; the rest are the labeling
//! vocabularies a browsable dataset commonly carries.

pub use oxrdf::vocab::{rdf, rdfs, xsd};

/// [DCMI Metadata Terms](https://www.dublincore.org/specifications/dublin-core/dcmi-terms/) vocabulary.
pub mod dcterms {
    use oxrdf::NamedNodeRef;

    /// `dcterms:title`
    pub const TITLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/title");
}

/// [SKOS](https://www.w3.org/TR/skos-reference/) vocabulary.
pub mod skos {
    use oxrdf::NamedNodeRef;

    /// `skos:prefLabel`
    pub const PREF_LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#prefLabel");

    /// `skos:altLabel`
    pub const ALT_LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#altLabel");
}

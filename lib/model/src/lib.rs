mod quad_set;
pub mod vocab;

pub use quad_set::QuadSet;

// Re-export some oxrdf types.
pub use oxiri::Iri;
pub use oxrdf::{
    BlankNode, BlankNodeRef, GraphName, GraphNameRef, IriParseError, Literal, LiteralRef,
    NamedNode, NamedNodeRef, Quad, QuadRef, Subject, SubjectRef, Term, TermRef,
};

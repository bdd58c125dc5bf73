/// Maps dataset-internal IRIs to externally browsable ones.
///
/// A pure prefix substitution: IRIs outside the dataset base pass through
/// unchanged, which also makes the rewrite idempotent.
#[derive(Debug, Clone)]
pub struct UrlRewriter {
    dataset_base: String,
    external_base: String,
}

impl UrlRewriter {
    pub fn new(dataset_base: impl Into<String>, external_base: impl Into<String>) -> Self {
        Self {
            dataset_base: dataset_base.into(),
            external_base: external_base.into(),
        }
    }

    pub fn rewrite(&self, iri: &str) -> String {
        match iri.strip_prefix(&self.dataset_base) {
            Some(rest) => format!("{}{rest}", self.external_base),
            None => iri.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter() -> UrlRewriter {
        UrlRewriter::new("http://data.example.org/", "https://browse.example.org/resource/")
    }

    #[test]
    fn dataset_iris_are_rewritten() {
        assert_eq!(
            rewriter().rewrite("http://data.example.org/item/42"),
            "https://browse.example.org/resource/item/42"
        );
    }

    #[test]
    fn foreign_iris_pass_through() {
        assert_eq!(
            rewriter().rewrite("http://www.w3.org/2000/01/rdf-schema#label"),
            "http://www.w3.org/2000/01/rdf-schema#label"
        );
    }

    #[test]
    fn rewrite_is_idempotent() {
        let rewriter = rewriter();
        let once = rewriter.rewrite("http://data.example.org/item/42");
        assert_eq!(rewriter.rewrite(&once), once);
    }
}

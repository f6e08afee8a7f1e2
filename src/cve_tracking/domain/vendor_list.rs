/// Ordered list of vendor/product terms to match against descriptions
///
/// Terms are matched case-insensitively. Blank and whitespace-only lines
/// are dropped at construction; duplicates are tolerated (harmless for
/// matching, the result is deduplicated by record id anyway).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorList {
    terms: Vec<String>,
}

impl VendorList {
    pub fn new(terms: Vec<String>) -> Self {
        let terms = terms
            .into_iter()
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty())
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

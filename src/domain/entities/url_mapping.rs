//! URL mapping entity.

/// A persisted mapping from a short alias to a target URL.
///
/// `id` is assigned by the store and increases monotonically. It is never
/// exposed to HTTP callers. Aliases are case-sensitive and immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_mapping_creation() {
        let mapping = UrlMapping::new(
            1,
            "google".to_string(),
            "https://google.com".to_string(),
        );

        assert_eq!(mapping.id, 1);
        assert_eq!(mapping.alias, "google");
        assert_eq!(mapping.url, "https://google.com");
    }

    #[test]
    fn test_aliases_are_case_sensitive() {
        let lower = UrlMapping::new(1, "abc".to_string(), "https://a.com".to_string());
        let upper = UrlMapping::new(1, "ABC".to_string(), "https://a.com".to_string());

        assert_ne!(lower, upper);
    }
}

use serde::Deserialize;

/// Raw exclusion rules as supplied by configuration.
///
/// Both lists hold regular expressions. They are compiled once by
/// `ExcludeComponents::compile` before any component is inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Filters {
    /// Patterns searched for in each component's package URL
    #[serde(alias = "purlRegex")]
    pub purl_regex: Vec<String>,
    /// Patterns searched for in each component's supplier
    pub suppliers: Vec<String>,
}

impl Filters {
    pub fn new(purl_regex: Vec<String>, suppliers: Vec<String>) -> Self {
        Self {
            purl_regex,
            suppliers,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.purl_regex.is_empty() && self.suppliers.is_empty()
    }

    /// Appends the patterns of `other` after this set's own patterns.
    pub fn extend(&mut self, other: Filters) {
        self.purl_regex.extend(other.purl_regex);
        self.suppliers.extend(other.suppliers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_snake_case() {
        let filters: Filters =
            serde_yaml_ng::from_str("purl_regex: ['^pkg:npm/']\nsuppliers: ['Acme']\n").unwrap();
        assert_eq!(filters.purl_regex, vec!["^pkg:npm/".to_string()]);
        assert_eq!(filters.suppliers, vec!["Acme".to_string()]);
    }

    #[test]
    fn test_deserialize_camel_case_alias() {
        let filters: Filters = serde_json::from_str(r#"{"purlRegex": ["internal"]}"#).unwrap();
        assert_eq!(filters.purl_regex, vec!["internal".to_string()]);
        assert!(filters.suppliers.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_unknown_keys() {
        let error = serde_yaml_ng::from_str::<Filters>("supplier: ['^Acme$']\n").unwrap_err();
        assert!(error.to_string().contains("unknown field `supplier`"));
    }

    #[test]
    fn test_extend_preserves_order() {
        let mut filters = Filters::new(vec!["a".to_string()], vec![]);
        filters.extend(Filters::new(vec!["b".to_string()], vec!["c".to_string()]));
        assert_eq!(filters.purl_regex, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(filters.suppliers, vec!["c".to_string()]);
        assert!(!filters.is_empty());
        assert!(Filters::default().is_empty());
    }
}

use crate::attribution::domain::{Component, Filters};
use crate::shared::error::{AttributionError, FilterField};
use crate::shared::Result;
use regex::Regex;

/// Maximum number of patterns per filter list
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single filter pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// ExcludeComponents - compiled exclusion rules
///
/// A component is excluded when its purl matches any purl pattern, or its
/// supplier matches any supplier pattern. Matching is an unanchored regex
/// search; a pattern that must match the whole value has to anchor itself
/// with `^...$`.
#[derive(Debug, Clone, Default)]
pub struct ExcludeComponents {
    purl_regex: Vec<Regex>,
    suppliers: Vec<Regex>,
}

impl ExcludeComponents {
    /// Compiles every pattern of `filters`, preserving their order.
    ///
    /// # Errors
    /// Returns `AttributionError::InvalidFilterPattern` for the first pattern
    /// that is not a valid regular expression, and the limit errors when a
    /// list or a pattern is too large. Callers treat these as fatal.
    pub fn compile(filters: &Filters) -> Result<Self> {
        Ok(Self {
            purl_regex: compile_patterns(&filters.purl_regex, FilterField::Purl)?,
            suppliers: compile_patterns(&filters.suppliers, FilterField::Supplier)?,
        })
    }

    /// Returns true if the component must be left out of every output
    pub fn is_excluded(&self, component: &Component) -> bool {
        self.purl_regex.iter().any(|re| re.is_match(component.purl()))
            || self
                .suppliers
                .iter()
                .any(|re| re.is_match(component.supplier()))
    }

    pub fn is_empty(&self) -> bool {
        self.purl_regex.is_empty() && self.suppliers.is_empty()
    }

    /// Number of components in `components` this rule set excludes
    pub fn count_excluded(&self, components: &[Component]) -> usize {
        components.iter().filter(|c| self.is_excluded(c)).count()
    }

    /// Returns the patterns that did not match any of `components`
    ///
    /// Useful after a build to warn about stale filter entries.
    pub fn unmatched_patterns(&self, components: &[Component]) -> Vec<String> {
        let purl_unmatched = self
            .purl_regex
            .iter()
            .filter(|re| !components.iter().any(|c| re.is_match(c.purl())));
        let supplier_unmatched = self
            .suppliers
            .iter()
            .filter(|re| !components.iter().any(|c| re.is_match(c.supplier())));

        purl_unmatched
            .chain(supplier_unmatched)
            .map(|re| re.as_str().to_string())
            .collect()
    }
}

/// Free-function form of [`ExcludeComponents::is_excluded`]
pub fn is_excluded(component: &Component, rules: &ExcludeComponents) -> bool {
    rules.is_excluded(component)
}

fn compile_patterns(patterns: &[String], field: FilterField) -> Result<Vec<Regex>> {
    if patterns.len() > MAX_EXCLUDE_PATTERNS {
        return Err(AttributionError::TooManyFilterPatterns {
            field,
            count: patterns.len(),
            max: MAX_EXCLUDE_PATTERNS,
        }
        .into());
    }

    patterns
        .iter()
        .map(|pattern| -> Result<Regex> {
            if pattern.chars().count() > MAX_PATTERN_LENGTH {
                return Err(AttributionError::FilterPatternTooLong {
                    field,
                    length: pattern.chars().count(),
                    max: MAX_PATTERN_LENGTH,
                }
                .into());
            }

            Regex::new(pattern).map_err(|e| {
                AttributionError::InvalidFilterPattern {
                    field,
                    pattern: pattern.clone(),
                    details: e.to_string(),
                }
                .into()
            })
        })
        .collect()
}

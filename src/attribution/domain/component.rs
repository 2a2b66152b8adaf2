/// A single license entry of a component.
///
/// CycloneDX allows either an SPDX expression or a license object per entry.
/// The SBOM reader maps each entry onto exactly one of these forms; an entry
/// with neither an expression nor an id/name still parses (as an empty
/// `License`) and is reported as malformed by the model builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseChoice {
    /// SPDX license expression, e.g. `MIT` or `MIT OR Apache-2.0`
    Expression(String),
    /// License object with an SPDX id and/or a free-form name
    License {
        id: String,
        name: String,
        /// License text embedded in the SBOM, if any
        text: Option<String>,
    },
}

impl LicenseChoice {
    pub fn expression(expression: impl Into<String>) -> Self {
        LicenseChoice::Expression(expression.into())
    }

    pub fn license(id: impl Into<String>, name: impl Into<String>) -> Self {
        LicenseChoice::License {
            id: id.into(),
            name: name.into(),
            text: None,
        }
    }

    pub fn license_with_text(
        id: impl Into<String>,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        LicenseChoice::License {
            id: id.into(),
            name: name.into(),
            text: Some(text.into()),
        }
    }

    /// Returns the key this choice is grouped under.
    ///
    /// * expression form: the expression string verbatim, operators included
    /// * license form: `id`, or `name` when `id` is empty
    ///
    /// Returns `None` when the choice carries no usable identifier.
    pub fn license_id(&self) -> Option<&str> {
        match self {
            LicenseChoice::Expression(expression) if !expression.is_empty() => {
                Some(expression.as_str())
            }
            LicenseChoice::Expression(_) => None,
            LicenseChoice::License { id, .. } if !id.is_empty() => Some(id.as_str()),
            LicenseChoice::License { name, .. } if !name.is_empty() => Some(name.as_str()),
            LicenseChoice::License { .. } => None,
        }
    }

    /// Returns the display name supplied by this choice, if any.
    pub fn license_name(&self) -> Option<&str> {
        match self {
            LicenseChoice::License { name, .. } if !name.is_empty() => Some(name.as_str()),
            _ => None,
        }
    }

    /// Returns the license text embedded in the SBOM, if any.
    pub fn license_text(&self) -> Option<&str> {
        match self {
            LicenseChoice::License {
                text: Some(text), ..
            } if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Component entity as read from the SBOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Component {
    name: String,
    version: String,
    purl: String,
    copyright: String,
    supplier: String,
    licenses: Vec<LicenseChoice>,
}

impl Component {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    pub fn with_purl(mut self, purl: impl Into<String>) -> Self {
        self.purl = purl.into();
        self
    }

    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = copyright.into();
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = supplier.into();
        self
    }

    pub fn with_licenses(mut self, licenses: Vec<LicenseChoice>) -> Self {
        self.licenses = licenses;
        self
    }

    pub fn with_license(mut self, license: LicenseChoice) -> Self {
        self.licenses.push(license);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn purl(&self) -> &str {
        &self.purl
    }

    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn licenses(&self) -> &[LicenseChoice] {
        &self.licenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_is_used_verbatim() {
        let choice = LicenseChoice::expression("MIT OR Apache-2.0");
        assert_eq!(choice.license_id(), Some("MIT OR Apache-2.0"));
        assert_eq!(choice.license_name(), None);
    }

    #[test]
    fn test_license_id_preferred_over_name() {
        let choice = LicenseChoice::license("BSD-3-Clause", "BSD 3-Clause License");
        assert_eq!(choice.license_id(), Some("BSD-3-Clause"));
        assert_eq!(choice.license_name(), Some("BSD 3-Clause License"));
    }

    #[test]
    fn test_license_name_fallback_when_id_empty() {
        let choice = LicenseChoice::license("", "Custom Vendor License");
        assert_eq!(choice.license_id(), Some("Custom Vendor License"));
        assert_eq!(choice.license_name(), Some("Custom Vendor License"));
    }

    #[test]
    fn test_malformed_choices_have_no_id() {
        assert_eq!(LicenseChoice::expression("").license_id(), None);
        assert_eq!(LicenseChoice::license("", "").license_id(), None);
    }

    #[test]
    fn test_license_text() {
        let choice = LicenseChoice::license_with_text("MIT", "", "Permission is hereby granted");
        assert_eq!(choice.license_text(), Some("Permission is hereby granted"));
        assert_eq!(LicenseChoice::license_with_text("MIT", "", "").license_text(), None);
        assert_eq!(LicenseChoice::expression("MIT").license_text(), None);
    }

    #[test]
    fn test_component_builder() {
        let component = Component::new("libfoo", "1.0")
            .with_purl("pkg:generic/libfoo@1.0")
            .with_supplier("Acme")
            .with_copyright("Copyright (c) Acme")
            .with_license(LicenseChoice::expression("MIT"));

        assert_eq!(component.name(), "libfoo");
        assert_eq!(component.version(), "1.0");
        assert_eq!(component.purl(), "pkg:generic/libfoo@1.0");
        assert_eq!(component.supplier(), "Acme");
        assert_eq!(component.copyright(), "Copyright (c) Acme");
        assert_eq!(component.licenses().len(), 1);
    }
}

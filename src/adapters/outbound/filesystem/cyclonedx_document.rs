use crate::attribution::domain::{Component, LicenseChoice};
use serde::Deserialize;

/// The subset of a CycloneDX JSON document needed for attribution
#[derive(Debug, Deserialize)]
pub(crate) struct Bom {
    #[serde(default)]
    components: Option<Vec<BomComponent>>,
}

#[derive(Debug, Deserialize)]
struct BomComponent {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    purl: Option<String>,
    #[serde(default)]
    copyright: Option<String>,
    #[serde(default)]
    supplier: Option<Supplier>,
    #[serde(default)]
    licenses: Option<Vec<BomLicenseChoice>>,
}

/// Supplier as a bare string or as a CycloneDX organizational entity
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Supplier {
    Name(String),
    Entity {
        #[serde(default)]
        name: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct BomLicenseChoice {
    #[serde(default)]
    expression: Option<String>,
    #[serde(default)]
    license: Option<BomLicense>,
}

#[derive(Debug, Deserialize)]
struct BomLicense {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    text: Option<AttachedText>,
}

#[derive(Debug, Deserialize)]
struct AttachedText {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

impl Bom {
    pub(crate) fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub(crate) fn into_components(self) -> Vec<Component> {
        self.components
            .unwrap_or_default()
            .into_iter()
            .map(BomComponent::into_component)
            .collect()
    }
}

impl BomComponent {
    fn into_component(self) -> Component {
        let supplier = match self.supplier {
            Some(Supplier::Name(name)) => name,
            Some(Supplier::Entity { name }) => name.unwrap_or_default(),
            None => String::new(),
        };

        let licenses = self
            .licenses
            .unwrap_or_default()
            .into_iter()
            .map(BomLicenseChoice::into_choice)
            .collect();

        Component::new(
            self.name.unwrap_or_default(),
            self.version.unwrap_or_default(),
        )
        .with_purl(self.purl.unwrap_or_default())
        .with_copyright(self.copyright.unwrap_or_default())
        .with_supplier(supplier)
        .with_licenses(licenses)
    }
}

impl BomLicenseChoice {
    /// A non-empty expression wins over a license object
    fn into_choice(self) -> LicenseChoice {
        match (self.expression, self.license) {
            (Some(expression), _) if !expression.is_empty() => {
                LicenseChoice::Expression(expression)
            }
            (_, Some(license)) => LicenseChoice::License {
                id: license.id.unwrap_or_default(),
                name: license.name.unwrap_or_default(),
                text: license.text.and_then(AttachedText::into_plain_text),
            },
            (expression, None) => LicenseChoice::Expression(expression.unwrap_or_default()),
        }
    }
}

impl AttachedText {
    /// Base64 attachments are not decoded; only plain text is kept
    fn into_plain_text(self) -> Option<String> {
        match self.encoding.as_deref() {
            Some(encoding) if encoding.eq_ignore_ascii_case("base64") => None,
            _ => self.content.filter(|content| !content.is_empty()),
        }
    }
}

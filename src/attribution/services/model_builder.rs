use crate::attribution::domain::{
    AttributionModel, Component, LicenseBlock, MalformedLicenseChoice, OutComponent, OverviewItem,
};
use crate::attribution::policies::PurlUrlPolicy;
use crate::attribution::services::ExcludeComponents;
use chrono::Utc;
use std::collections::BTreeMap;

/// Members and metadata collected for one license key while building
#[derive(Debug, Default)]
struct LicenseGroup {
    name: String,
    text: String,
    used_by: Vec<OutComponent>,
}

/// AttributionModelBuilder service turning SBOM components into the output model
///
/// Steps, in order:
/// 1. drop components matched by the exclusion rules
/// 2. derive each survivor's license keys (see `LicenseChoice::license_id`)
/// 3. list every survivor as a notice, in SBOM order
/// 4. group survivors by license key; a component with N keys joins N groups
/// 5. emit license blocks and overview rows sorted by key
///
/// The builder never fails. License entries without any identifier are
/// skipped and listed in `AttributionModel::malformed_licenses`.
pub struct AttributionModelBuilder;

impl AttributionModelBuilder {
    /// Builds the model, stamping it with the current time
    pub fn build(components: &[Component], rules: &ExcludeComponents) -> AttributionModel {
        Self::build_at(components, rules, Utc::now().to_rfc3339())
    }

    /// Builds the model with an explicit `generated_at` stamp
    pub fn build_at(
        components: &[Component],
        rules: &ExcludeComponents,
        generated_at: String,
    ) -> AttributionModel {
        let mut notices = Vec::new();
        let mut groups: BTreeMap<String, LicenseGroup> = BTreeMap::new();
        let mut malformed_licenses = Vec::new();

        for component in components.iter().filter(|c| !rules.is_excluded(c)) {
            let out = Self::build_out_component(component, &mut malformed_licenses);

            for choice in component.licenses() {
                let Some(id) = choice.license_id() else {
                    continue;
                };
                let group = groups.entry(id.to_string()).or_default();
                if group.name.is_empty() {
                    if let Some(name) = choice.license_name() {
                        group.name = name.to_string();
                    }
                }
                if group.text.is_empty() {
                    if let Some(text) = choice.license_text() {
                        group.text = text.to_string();
                    }
                }
            }

            for id in &out.license_ids {
                groups
                    .entry(id.clone())
                    .or_default()
                    .used_by
                    .push(out.clone());
            }

            notices.push(out);
        }

        let licenses = Self::build_license_blocks(groups);
        let overview = Self::build_overview(&licenses);

        AttributionModel {
            generated_at,
            overview,
            licenses,
            notices,
            malformed_licenses,
        }
    }

    /// Converts a component into its notice entry
    ///
    /// License keys keep SBOM order; a key listed twice by the same component
    /// is kept once so the component appears once in that license block.
    fn build_out_component(
        component: &Component,
        malformed: &mut Vec<MalformedLicenseChoice>,
    ) -> OutComponent {
        let mut license_ids: Vec<String> = Vec::with_capacity(component.licenses().len());

        for (index, choice) in component.licenses().iter().enumerate() {
            match choice.license_id() {
                Some(id) => {
                    if !license_ids.iter().any(|existing| existing == id) {
                        license_ids.push(id.to_string());
                    }
                }
                None => malformed.push(MalformedLicenseChoice {
                    component: component.name().to_string(),
                    version: component.version().to_string(),
                    index,
                }),
            }
        }

        OutComponent {
            name: component.name().to_string(),
            version: component.version().to_string(),
            purl: component.purl().to_string(),
            url: PurlUrlPolicy::derive(component.purl()),
            license_ids,
            copyright: component.copyright().to_string(),
        }
    }

    /// BTreeMap iteration yields keys in ordinal byte order
    fn build_license_blocks(groups: BTreeMap<String, LicenseGroup>) -> Vec<LicenseBlock> {
        groups
            .into_iter()
            .map(|(id, group)| LicenseBlock {
                id,
                name: group.name,
                text: group.text,
                used_by: group.used_by,
            })
            .collect()
    }

    fn build_overview(licenses: &[LicenseBlock]) -> Vec<OverviewItem> {
        licenses
            .iter()
            .map(|block| OverviewItem {
                id: block.id.clone(),
                name: block.name.clone(),
                count: block.used_by.len(),
            })
            .collect()
    }
}

use crate::attribution::domain::{AttributionModel, LicenseBlock, OutComponent, OverviewItem};
use crate::ports::outbound::{AttributionFormatter, RenderContext};
use crate::shared::Result;

/// Width of the rules separating NOTICE sections
const RULE_WIDTH: usize = 80;

/// Artifact name inside the output directory
const NOTICE_FILE_NAME: &str = "NOTICE";

/// NoticeFormatter adapter for generating the plaintext NOTICE file
///
/// Layout: a header, the license overview, one entry per component, then
/// the full text of every license in use.
pub struct NoticeFormatter;

impl NoticeFormatter {
    pub fn new() -> Self {
        Self
    }

    fn rule(c: char) -> String {
        let mut line = c.to_string().repeat(RULE_WIDTH);
        line.push('\n');
        line
    }

    fn component_label(component: &OutComponent) -> String {
        if component.version.is_empty() {
            component.name.clone()
        } else {
            format!("{} {}", component.name, component.version)
        }
    }

    fn identity(text: &str) -> String {
        text.to_string()
    }
}

impl Default for NoticeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl NoticeFormatter {
    fn render_header(&self, output: &mut String, model: &AttributionModel, ctx: &RenderContext) {
        output.push_str("THIRD-PARTY SOFTWARE NOTICES AND INFORMATION\n\n");
        if !ctx.repo_name.is_empty() {
            output.push_str(&format!(
                "{} includes the third-party software listed below.\n",
                ctx.repo_name
            ));
        } else {
            output.push_str("This software includes the third-party software listed below.\n");
        }
        output.push_str(&format!("Generated: {}\n\n", model.generated_at));
    }

    fn render_section_title(&self, output: &mut String, title: &str) {
        output.push_str(&Self::rule('='));
        output.push_str(title);
        output.push('\n');
        output.push_str(&Self::rule('='));
        output.push('\n');
    }

    fn render_overview(&self, output: &mut String, overview: &[OverviewItem]) {
        self.render_section_title(output, "LICENSE OVERVIEW");

        if overview.is_empty() {
            output.push_str("No third-party components.\n\n");
            return;
        }

        for item in overview {
            let label = if item.name.is_empty() || item.name == item.id {
                item.id.clone()
            } else {
                format!("{} ({})", item.name, item.id)
            };
            output.push_str(&format!(
                "  {}: {} {}\n",
                label,
                item.count,
                if item.count == 1 {
                    "component"
                } else {
                    "components"
                }
            ));
        }
        output.push('\n');
    }

    fn render_notices(&self, output: &mut String, notices: &[OutComponent]) {
        self.render_section_title(output, "COMPONENTS");

        for component in notices {
            output.push_str(&Self::component_label(component));
            output.push('\n');
            if !component.url.is_empty() {
                output.push_str(&format!("  Homepage: {}\n", component.url));
            }
            if !component.purl.is_empty() {
                output.push_str(&format!("  Package URL: {}\n", component.purl));
            }
            if !component.license_ids.is_empty() {
                output.push_str(&format!(
                    "  License: {}\n",
                    component.license_ids.join(", ")
                ));
            }
            if !component.copyright.is_empty() {
                for line in component.copyright.lines() {
                    output.push_str(&format!("  {}\n", line));
                }
            }
            output.push('\n');
        }
    }

    fn render_license(&self, output: &mut String, block: &LicenseBlock, ctx: &RenderContext) {
        output.push_str(&Self::rule('-'));
        if block.display_name() == block.id {
            output.push_str(&format!("{}\n", block.id));
        } else {
            output.push_str(&format!("{} ({})\n", block.display_name(), block.id));
        }
        output.push_str(&Self::rule('-'));

        let users: Vec<String> = block.used_by.iter().map(Self::component_label).collect();
        output.push_str(&format!("Used by: {}\n\n", users.join(", ")));

        if block.text.is_empty() {
            output.push_str(&format!(
                "License text not bundled. See the SPDX License List {} for the text of {}.\n",
                ctx.spdx_version, block.id
            ));
        } else {
            output.push_str(block.text.trim_end());
            output.push('\n');
        }
        output.push('\n');
    }

    fn render_licenses(&self, output: &mut String, licenses: &[LicenseBlock], ctx: &RenderContext) {
        if licenses.is_empty() {
            return;
        }
        self.render_section_title(output, "LICENSE TEXTS");
        for block in licenses {
            self.render_license(output, block, ctx);
        }
    }
}

impl AttributionFormatter for NoticeFormatter {
    fn format(&self, model: &AttributionModel, context: &RenderContext) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model, context);
        self.render_overview(&mut output, &model.overview);
        if !model.notices.is_empty() {
            self.render_notices(&mut output, &model.notices);
        }
        self.render_licenses(&mut output, &model.licenses, context);

        Ok(context.apply_template(output, model, Self::identity))
    }

    fn file_name(&self) -> &'static str {
        NOTICE_FILE_NAME
    }
}

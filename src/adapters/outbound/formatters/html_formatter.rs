use crate::attribution::domain::{AttributionModel, LicenseBlock, OutComponent, OverviewItem};
use crate::attribution::policies::PurlUrlPolicy;
use crate::ports::outbound::{AttributionFormatter, RenderContext};
use crate::shared::Result;

/// Artifact name inside the output directory
const HTML_FILE_NAME: &str = "licenses.html";

/// Inline stylesheet for the standalone report
const STYLE: &str = "body { font-family: sans-serif; margin: 2em; }\n\
table { border-collapse: collapse; }\n\
th, td { border: 1px solid #ccc; padding: 0.3em 0.8em; text-align: left; }\n\
pre { white-space: pre-wrap; background: #f6f8fa; padding: 1em; }\n";

/// HtmlFormatter adapter for generating the HTML license report
///
/// Every value taken from the SBOM is HTML-escaped. License blocks are
/// anchored by position (`license-0`, `license-1`, ...) because license
/// keys may contain spaces and parentheses.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes text for use in element content and quoted attributes
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    fn anchor(model: &AttributionModel, license_id: &str) -> Option<String> {
        model
            .licenses
            .iter()
            .position(|block| block.id == license_id)
            .map(|index| format!("license-{}", index))
    }

    fn component_name(component: &OutComponent) -> String {
        let name = Self::escape(&component.name);
        if !PurlUrlPolicy::is_web_url(&component.url) {
            name
        } else {
            format!("<a href=\"{}\">{}</a>", Self::escape(&component.url), name)
        }
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl HtmlFormatter {
    fn render_header(&self, output: &mut String, model: &AttributionModel, ctx: &RenderContext) {
        let title = if ctx.repo_name.is_empty() {
            "Third-Party Licenses".to_string()
        } else {
            format!("Third-Party Licenses for {}", Self::escape(&ctx.repo_name))
        };

        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n");
        output.push_str(&format!("<title>{}</title>\n", title));
        output.push_str(&format!("<style>\n{}</style>\n", STYLE));
        output.push_str("</head>\n<body>\n");
        output.push_str(&format!("<h1>{}</h1>\n", title));
        output.push_str(&format!(
            "<p>Generated at <time>{}</time></p>\n",
            Self::escape(&model.generated_at)
        ));
    }

    fn render_overview(
        &self,
        output: &mut String,
        model: &AttributionModel,
        overview: &[OverviewItem],
    ) {
        output.push_str("<h2 id=\"overview\">Overview</h2>\n");

        if overview.is_empty() {
            output.push_str("<p>No third-party components.</p>\n");
            return;
        }

        output.push_str("<table>\n<thead><tr><th>License</th><th>Name</th><th>Components</th></tr></thead>\n<tbody>\n");
        for item in overview {
            let id = Self::escape(&item.id);
            let id_cell = match Self::anchor(model, &item.id) {
                Some(anchor) => format!("<a href=\"#{}\">{}</a>", anchor, id),
                None => id,
            };
            output.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                id_cell,
                Self::escape(&item.name),
                item.count
            ));
        }
        output.push_str("</tbody>\n</table>\n");
    }

    fn render_licenses(&self, output: &mut String, licenses: &[LicenseBlock], ctx: &RenderContext) {
        if licenses.is_empty() {
            return;
        }

        output.push_str("<h2 id=\"licenses\">Licenses</h2>\n");
        for (index, block) in licenses.iter().enumerate() {
            output.push_str(&format!("<section id=\"license-{}\">\n", index));
            if block.display_name() == block.id {
                output.push_str(&format!("<h3>{}</h3>\n", Self::escape(&block.id)));
            } else {
                output.push_str(&format!(
                    "<h3>{} <small>({})</small></h3>\n",
                    Self::escape(block.display_name()),
                    Self::escape(&block.id)
                ));
            }

            output.push_str("<p>Used by:</p>\n<ul>\n");
            for component in &block.used_by {
                output.push_str(&format!(
                    "<li>{} {}</li>\n",
                    Self::component_name(component),
                    Self::escape(&component.version)
                ));
            }
            output.push_str("</ul>\n");

            if block.text.is_empty() {
                output.push_str(&format!(
                    "<p>License text not bundled. See the SPDX License List {} for the text of {}.</p>\n",
                    Self::escape(&ctx.spdx_version),
                    Self::escape(&block.id)
                ));
            } else {
                output.push_str(&format!(
                    "<pre>{}</pre>\n",
                    Self::escape(block.text.trim_end())
                ));
            }
            output.push_str("</section>\n");
        }
    }

    fn render_notices(&self, output: &mut String, model: &AttributionModel) {
        if model.notices.is_empty() {
            return;
        }

        output.push_str("<h2 id=\"notices\">Notices</h2>\n");
        output.push_str("<table>\n<thead><tr><th>Component</th><th>Version</th><th>Licenses</th><th>Copyright</th></tr></thead>\n<tbody>\n");
        for component in &model.notices {
            let licenses: Vec<String> = component
                .license_ids
                .iter()
                .map(|id| {
                    let escaped = Self::escape(id);
                    match Self::anchor(model, id) {
                        Some(anchor) => format!("<a href=\"#{}\">{}</a>", anchor, escaped),
                        None => escaped,
                    }
                })
                .collect();
            output.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                Self::component_name(component),
                Self::escape(&component.version),
                licenses.join(", "),
                Self::escape(&component.copyright)
            ));
        }
        output.push_str("</tbody>\n</table>\n");
    }

    fn render_footer(&self, output: &mut String, ctx: &RenderContext) {
        if !ctx.spdx_version.is_empty() {
            output.push_str(&format!(
                "<footer><p>License identifiers follow the SPDX License List {}.</p></footer>\n",
                Self::escape(&ctx.spdx_version)
            ));
        }
        output.push_str("</body>\n</html>\n");
    }
}

impl AttributionFormatter for HtmlFormatter {
    fn format(&self, model: &AttributionModel, context: &RenderContext) -> Result<String> {
        if context.template.is_some() {
            // The template owns the document skeleton; only the sections are rendered.
            let mut body = String::new();
            self.render_overview(&mut body, model, &model.overview);
            self.render_licenses(&mut body, &model.licenses, context);
            self.render_notices(&mut body, model);
            return Ok(context.apply_template(body, model, Self::escape));
        }

        let mut output = String::new();
        self.render_header(&mut output, model, context);
        self.render_overview(&mut output, model, &model.overview);
        self.render_licenses(&mut output, &model.licenses, context);
        self.render_notices(&mut output, model);
        self.render_footer(&mut output, context);
        Ok(output)
    }

    fn file_name(&self) -> &'static str {
        HTML_FILE_NAME
    }
}

use crate::attribution::domain::AttributionModel;
use crate::shared::Result;

/// Marker replaced by the rendered body when a template is used
pub const CONTENT_MARKER: &str = "{{content}}";

/// Marker replaced by the repository name when a template is used
pub const REPO_NAME_MARKER: &str = "{{repo_name}}";

/// Marker replaced by the build timestamp when a template is used
pub const GENERATED_AT_MARKER: &str = "{{generated_at}}";

/// Rendering settings shared by all attribution formatters
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Name of the repository the artifacts are generated for
    pub repo_name: String,
    /// SPDX license list version the license texts were taken from
    pub spdx_version: String,
    /// Template content wrapping the rendered body, if configured
    pub template: Option<String>,
}

impl RenderContext {
    pub fn new(repo_name: impl Into<String>, spdx_version: impl Into<String>) -> Self {
        Self {
            repo_name: repo_name.into(),
            spdx_version: spdx_version.into(),
            template: None,
        }
    }

    pub fn with_template(mut self, template: Option<String>) -> Self {
        self.template = template;
        self
    }

    /// Places `body` into the configured template, or returns it unchanged
    ///
    /// `escape` is applied to the repository name and timestamp before they
    /// are substituted, so HTML templates receive escaped values.
    pub fn apply_template(
        &self,
        body: String,
        model: &AttributionModel,
        escape: fn(&str) -> String,
    ) -> String {
        let Some(template) = &self.template else {
            return body;
        };

        let substitutions = [
            (CONTENT_MARKER, body),
            (REPO_NAME_MARKER, escape(&self.repo_name)),
            (GENERATED_AT_MARKER, escape(&model.generated_at)),
        ];

        // Single pass: substituted values are never scanned for markers.
        let mut output = String::with_capacity(template.len());
        let mut rest = template.as_str();
        loop {
            let current = rest;
            let next = substitutions
                .iter()
                .filter_map(|(marker, value)| current.find(*marker).map(|i| (i, *marker, value)))
                .min_by_key(|(i, _, _)| *i);
            let Some((index, marker, value)) = next else {
                break;
            };
            output.push_str(&current[..index]);
            output.push_str(value);
            rest = &current[index + marker.len()..];
        }
        output.push_str(rest);
        output
    }
}

/// AttributionFormatter port for rendering the attribution model
///
/// Implementations produce one artifact each (plaintext NOTICE, HTML report).
pub trait AttributionFormatter {
    /// Renders the model
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, model: &AttributionModel, context: &RenderContext) -> Result<String>;

    /// Default file name of the artifact inside the output directory
    fn file_name(&self) -> &'static str;
}

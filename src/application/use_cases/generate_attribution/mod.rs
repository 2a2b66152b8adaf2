use crate::application::dto::{AttributionRequest, AttributionResponse};
use crate::attribution::domain::{AttributionModel, Component};
use crate::attribution::services::{AttributionModelBuilder, ExcludeComponents};
use crate::ports::outbound::{LicenseTextRepository, ProgressReporter, SbomReader};
use crate::shared::Result;

/// GenerateAttributionUseCase - Core use case for attribution generation
///
/// Orchestrates the workflow with generic dependency injection for all
/// infrastructure dependencies:
/// 1. compile the exclusion rules (fatal on error)
/// 2. read components from the SBOM
/// 3. build the attribution model
/// 4. report exclusions, stale patterns and malformed license entries
/// 5. fill in missing license texts from the repository
///
/// # Type Parameters
/// * `SR` - SbomReader implementation
/// * `LTR` - LicenseTextRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateAttributionUseCase<SR, LTR, PR> {
    sbom_reader: SR,
    license_text_repository: LTR,
    progress_reporter: PR,
}

impl<SR, LTR, PR> GenerateAttributionUseCase<SR, LTR, PR>
where
    SR: SbomReader,
    LTR: LicenseTextRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateAttributionUseCase with injected dependencies
    pub fn new(sbom_reader: SR, license_text_repository: LTR, progress_reporter: PR) -> Self {
        Self {
            sbom_reader,
            license_text_repository,
            progress_reporter,
        }
    }

    /// Executes the attribution use case
    ///
    /// # Errors
    /// Fails on invalid exclusion patterns and on an unreadable or
    /// unparsable SBOM. Per-record problems are reported as warnings.
    pub fn execute(&self, request: AttributionRequest) -> Result<AttributionResponse> {
        // Step 1: Compile exclusion rules before touching the SBOM
        let rules = ExcludeComponents::compile(&request.filters)?;

        // Step 2: Read components
        let components = self.read_components(&request)?;

        // Early return for dry-run mode (validation only)
        if request.dry_run {
            return Ok(self.build_dry_run_response(&components, &rules));
        }

        // Step 3: Build the model
        let mut model = AttributionModelBuilder::build(&components, &rules);

        // Step 4: Report what was left out
        let excluded_count = self.report_exclusions(&components, &rules);
        let unmatched_patterns = self.report_unmatched_patterns(&components, &rules);
        self.report_malformed_licenses(&model);

        // Step 5: Resolve license texts the SBOM did not embed
        self.resolve_license_texts(&mut model);

        self.progress_reporter.report(&format!(
            "✅ Attribution model ready: {} component(s), {} license(s)",
            model.notices.len(),
            model.licenses.len()
        ));

        Ok(AttributionResponse {
            model: Some(model),
            component_count: components.len(),
            excluded_count,
            unmatched_patterns,
        })
    }

    fn read_components(&self, request: &AttributionRequest) -> Result<Vec<Component>> {
        self.progress_reporter.report(&format!(
            "📖 Loading SBOM from: {}",
            request.sbom_path.display()
        ));

        let components = self.sbom_reader.read_components(&request.sbom_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} component(s)", components.len()));

        Ok(components)
    }

    fn build_dry_run_response(
        &self,
        components: &[Component],
        rules: &ExcludeComponents,
    ) -> AttributionResponse {
        let excluded_count = self.report_exclusions(components, rules);
        let unmatched_patterns = self.report_unmatched_patterns(components, rules);

        self.progress_reporter
            .report_completion("Success: Configuration validated. No issues found.");

        AttributionResponse {
            model: None,
            component_count: components.len(),
            excluded_count,
            unmatched_patterns,
        }
    }

    fn report_exclusions(&self, components: &[Component], rules: &ExcludeComponents) -> usize {
        if rules.is_empty() {
            return 0;
        }

        let excluded_count = rules.count_excluded(components);
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} component(s) based on filters",
                excluded_count
            ));
        }
        if !components.is_empty() && excluded_count == components.len() {
            self.progress_reporter.report_warning(&format!(
                "Warning: All {} component(s) were excluded by the provided filters. \
                 The generated artifacts will list no third-party software.",
                components.len()
            ));
        }

        excluded_count
    }

    fn report_unmatched_patterns(
        &self,
        components: &[Component],
        rules: &ExcludeComponents,
    ) -> Vec<String> {
        let unmatched = rules.unmatched_patterns(components);
        for pattern in &unmatched {
            self.progress_reporter.report_warning(&format!(
                "Warning: Exclude pattern '{}' did not match any components.",
                pattern
            ));
        }
        unmatched
    }

    fn report_malformed_licenses(&self, model: &AttributionModel) {
        for malformed in &model.malformed_licenses {
            self.progress_reporter.report_warning(&format!(
                "Warning: License entry #{} of {} {} has neither an expression nor an id or name; skipped.",
                malformed.index + 1,
                malformed.component,
                malformed.version
            ));
        }
    }

    /// Looks up texts for blocks whose SBOM entries carried none
    ///
    /// A failed lookup leaves the text empty and is reported as a warning.
    fn resolve_license_texts(&self, model: &mut AttributionModel) {
        let total = model.licenses.iter().filter(|b| b.text.is_empty()).count();
        if total == 0 {
            return;
        }

        self.progress_reporter
            .report(&format!("🔍 Resolving {} license text(s)...", total));

        let mut resolved = 0;
        let mut processed = 0;
        for block in model.licenses.iter_mut().filter(|b| b.text.is_empty()) {
            processed += 1;
            self.progress_reporter
                .report_progress(processed, total, Some(block.id.as_str()));

            match self.license_text_repository.find_license_text(&block.id) {
                Ok(Some(text)) => {
                    block.text = text;
                    resolved += 1;
                }
                Ok(None) => {}
                Err(e) => self.progress_reporter.report_warning(&format!(
                    "Warning: Failed to read license text for {}: {}",
                    block.id, e
                )),
            }
        }

        self.progress_reporter.report(&format!(
            "✅ Resolved {}/{} license text(s)",
            resolved, total
        ));
    }
}

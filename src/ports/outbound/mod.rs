/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the application core needs from the outside
/// world: SBOM input, license texts, templates, rendering and output.
pub mod formatter;
pub mod license_text_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod sbom_reader;
pub mod template_reader;

pub use formatter::{AttributionFormatter, RenderContext};
pub use license_text_repository::LicenseTextRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sbom_reader::SbomReader;
pub use template_reader::TemplateReader;

/// Mock implementations for testing
mod mock_license_text_repository;
mod mock_progress_reporter;
mod mock_sbom_reader;

pub use mock_license_text_repository::MockLicenseTextRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_sbom_reader::MockSbomReader;

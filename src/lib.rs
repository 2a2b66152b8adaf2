//! sbom-notice - Attribution generator for CycloneDX SBOMs
//!
//! This library turns the components of a CycloneDX JSON SBOM into
//! attribution artifacts: a plaintext NOTICE file and an HTML license
//! report. It follows a hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`attribution`): components, exclusion rules and the
//!   attribution model builder
//! - **Application Layer** (`application`): use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): CycloneDX reader, license text store,
//!   NOTICE/HTML formatters and console output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_notice::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateAttributionUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemLicenseTextStore::new(PathBuf::from("third_party/licenses")),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = AttributionRequest::new(PathBuf::from("third_party/sbom"))
//!     .with_filters(Filters::new(vec!["^pkg:npm/@internal/".to_string()], vec![]));
//! let response = use_case.execute(request)?;
//!
//! if let Some(model) = response.model {
//!     let context = RenderContext::new("my-app", "v3.27.0");
//!     let notice = NoticeFormatter::new().format(&model, &context)?;
//!     println!("{}", notice);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod attribution;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemLicenseTextStore, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{HtmlFormatter, NoticeFormatter};
    pub use crate::application::dto::{AttributionRequest, AttributionResponse, OutputFormat};
    pub use crate::application::use_cases::GenerateAttributionUseCase;
    pub use crate::attribution::domain::{
        AttributionModel, Component, Filters, LicenseBlock, LicenseChoice, OutComponent,
        OverviewItem,
    };
    pub use crate::attribution::policies::PurlUrlPolicy;
    pub use crate::attribution::services::{is_excluded, AttributionModelBuilder, ExcludeComponents};
    pub use crate::config::AttributionConfig;
    pub use crate::ports::outbound::{
        AttributionFormatter, LicenseTextRepository, OutputPresenter, ProgressReporter,
        RenderContext, SbomReader, TemplateReader,
    };
    pub use crate::shared::Result;
}

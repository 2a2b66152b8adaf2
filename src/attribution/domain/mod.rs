pub mod attribution_model;
pub mod component;
pub mod filters;

pub use attribution_model::{
    AttributionModel, LicenseBlock, MalformedLicenseChoice, OutComponent, OverviewItem,
};
pub use component::{Component, LicenseChoice};
pub use filters::Filters;

pub mod exclude_components;
pub mod model_builder;

pub use exclude_components::{is_excluded, ExcludeComponents};
pub use model_builder::AttributionModelBuilder;

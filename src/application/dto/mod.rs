/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the adapters,
/// keeping the attribution domain isolated.
mod attribution_request;
mod attribution_response;
mod output_format;

pub use attribution_request::AttributionRequest;
pub use attribution_response::AttributionResponse;
pub use output_format::OutputFormat;

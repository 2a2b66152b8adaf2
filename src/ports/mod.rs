/// Ports module defining interfaces for hexagonal architecture
///
/// The application core drives everything through outbound (driven)
/// ports; the CLI in `main.rs` calls the use case directly.
pub mod outbound;

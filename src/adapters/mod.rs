/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// CycloneDX input, license text lookup, rendering and console output.
pub mod outbound;

/// Attribution domain - components, exclusion rules and the output model
///
/// Everything in here is pure: no file, network or console access.
pub mod domain;
pub mod policies;
pub mod services;

pub mod purl_url;

pub use purl_url::PurlUrlPolicy;

/// Filesystem adapters for file I/O operations
mod cyclonedx_document;
mod file_reader;
mod file_writer;
mod license_text_store;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use license_text_store::FileSystemLicenseTextStore;

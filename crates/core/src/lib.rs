//! docsync core library.
//!
//! Fetches a fixed set of template files from a GitHub repository's raw
//! content host and writes them into a local project directory.

pub mod config;
pub mod errors;
pub mod fetch;
pub mod sync;
pub mod writer;

// Re-exports for convenience.
pub use config::{SyncConfig, SyncEntry};
pub use fetch::RawClient;
pub use sync::{SyncReport, TemplateSync};
pub use writer::ProjectWriter;

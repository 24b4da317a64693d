//! A deferred-formatting log buffer for request-handling pipelines.
//!
//! The owning dispatcher appends human-readable trace lines while it
//! processes a unit of work, then renders them for terminal display once
//! the work completes. Titled entries share a single title column whose
//! width only ever grows, so alignment stays stable across requests
//! instead of jittering with each one.
//!
//! The crate performs no I/O of its own: [`LogBuffer::get_logs`] hands
//! the rendered lines back to the owner, which prints them.
pub mod buffer;
pub mod config;
pub mod entry;
pub mod format;

pub use buffer::LogBuffer;
pub use config::LogConfig;
pub use entry::LogEntry;
pub use format::{format_message, LogValue};

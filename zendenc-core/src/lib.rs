//! Core library for batch-encoding PHP sources with the Zend Guard encoder.
//!
//! This crate provides the encoder option model and validation, deterministic
//! command rendering, glob-based file selection, and the sequential driver
//! that invokes the encoder binary once per matched file, aborting the run
//! on the first failure.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use zendenc_core::{EncodeOptionsBuilder, FileSelection, encode_files};
//! use zendenc_core::external::ProcessInvoker;
//! use std::path::PathBuf;
//!
//! let options = EncodeOptionsBuilder::new(PathBuf::from("/opt/zend/bin/zendenc"))
//!     .rename_source_ext("bak")
//!     .obfuscation_level(2)
//!     .build();
//!
//! let sources = FileSelection::new(
//!     "sources",
//!     PathBuf::from("/srv/app"),
//!     vec!["**/*.php".to_string()],
//!     vec!["vendor/**".to_string()],
//! );
//!
//! let summary = encode_files(&ProcessInvoker, &options, &[sources]).unwrap();
//! println!("Encoded files: {}", summary.encoded);
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod external;
pub mod manifest;
pub mod processing;
pub mod selection;

// Re-exports for public API
pub use command::{format_command, render_args};
pub use config::{EncodeOptions, EncodeOptionsBuilder, SigningMode, SourceDisposition};
pub use error::{CoreError, CoreResult};
pub use external::{EncoderInvoker, InvocationOutput, ProcessInvoker};
pub use manifest::EncodeJob;
pub use processing::encode_files;
pub use selection::FileSelection;

/// Result of a completed encoding run.
///
/// Returned by [`encode_files`] when every matched file encoded cleanly.
#[derive(Debug, Clone)]
pub struct EncodeSummary {
    /// Number of files the encoder processed successfully.
    pub encoded: u64,
}

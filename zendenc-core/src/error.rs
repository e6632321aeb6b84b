use std::io;
use thiserror::Error;

/// Custom error types for zendenc.
///
/// Two kinds are fatal to a run by design: `Config` (raised during
/// validation, before any process is spawned) and `EncodingFailed` (a
/// non-zero encoder exit, which aborts all remaining work).
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Directory walk error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Encoding failed with exit code {code}.\nOutput: {output}\nEncode command: {command}")]
    EncodingFailed {
        command: String,
        code: i32,
        output: String,
    },

    #[error("Invalid path: {0}")]
    PathError(String),
}

/// Result type for zendenc operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

//! Interactions with the external encoder binary.
//!
//! The invocation boundary is a trait so the driver can be exercised against
//! a scripted invoker in tests; the production implementation spawns the
//! real process with `std::process::Command`. Standard error is merged into
//! the captured output text, and the process is fully reaped (output
//! collected, exit status waited) on every path before control returns.

use std::path::Path;
use std::process::Command;

use crate::error::{CoreError, CoreResult};

#[cfg(feature = "test-mocks")]
pub mod mocks;

/// Captured outcome of one per-file encoder invocation.
#[derive(Debug, Clone)]
pub struct InvocationOutput {
    /// Process exit code; -1 when the process was terminated by a signal.
    pub exit_code: i32,
    /// Combined stdout and stderr text.
    pub output: String,
}

impl InvocationOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Trait representing something that can run the encoder over one file.
pub trait EncoderInvoker {
    /// Runs `<program> <args...> <file>`, blocking until the process exits,
    /// and returns its merged output and exit code.
    fn invoke(&self, program: &Path, args: &[String], file: &Path) -> CoreResult<InvocationOutput>;
}

/// Production invoker backed by `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct ProcessInvoker;

impl EncoderInvoker for ProcessInvoker {
    fn invoke(&self, program: &Path, args: &[String], file: &Path) -> CoreResult<InvocationOutput> {
        let output = Command::new(program)
            .args(args)
            .arg(file)
            .output()
            .map_err(|e| CoreError::CommandStart(program.display().to_string(), e))?;

        // No shell, so no `2>&1`; both pipes are captured and stderr text is
        // appended to stdout text to form the single output.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&stderr);
        }

        Ok(InvocationOutput {
            exit_code: output.status.code().unwrap_or(-1),
            output: text,
        })
    }
}

// zendenc-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// This module is only compiled when the "test-mocks" feature is enabled.
#![cfg(feature = "test-mocks")]

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::{EncoderInvoker, InvocationOutput};
use crate::error::CoreResult;

/// One recorded invocation: the file the encoder was pointed at and the
/// rendered argument list it was given.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub file: PathBuf,
    pub args: Vec<String>,
}

/// Scripted implementation of [`EncoderInvoker`].
///
/// Every call succeeds with empty output unless a failure has been
/// registered for a matching file. All calls are recorded, so tests can
/// assert invocation order or that validation failures produced zero
/// invocations.
#[derive(Clone, Default)]
pub struct MockInvoker {
    failures: Rc<RefCell<Vec<(PathBuf, InvocationOutput)>>>,
    received_calls: Rc<RefCell<Vec<RecordedCall>>>,
}

impl MockInvoker {
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers a non-zero exit for any invoked file whose path ends with
    /// `file` (so tests can script by file name without knowing the
    /// temporary directory prefix).
    pub fn fail_on(&self, file: &str, exit_code: i32, output: &str) {
        self.failures.borrow_mut().push((
            PathBuf::from(file),
            InvocationOutput {
                exit_code,
                output: output.to_string(),
            },
        ));
    }

    pub fn received_calls(&self) -> Vec<RecordedCall> {
        self.received_calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.received_calls.borrow().len()
    }

    /// File paths of every invocation, in order.
    pub fn invoked_files(&self) -> Vec<PathBuf> {
        self.received_calls
            .borrow()
            .iter()
            .map(|call| call.file.clone())
            .collect()
    }
}

impl EncoderInvoker for MockInvoker {
    fn invoke(&self, _program: &Path, args: &[String], file: &Path) -> CoreResult<InvocationOutput> {
        self.received_calls.borrow_mut().push(RecordedCall {
            file: file.to_path_buf(),
            args: args.to_vec(),
        });

        let failure = self
            .failures
            .borrow()
            .iter()
            .find(|(suffix, _)| file.ends_with(suffix))
            .map(|(_, output)| output.clone());

        Ok(failure.unwrap_or(InvocationOutput {
            exit_code: 0,
            output: String::new(),
        }))
    }
}

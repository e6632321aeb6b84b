//! Main encoding orchestration: validate, resolve, invoke.
//!
//! The run is a single linear pipeline. Validation happens before any
//! fileset is resolved or any process spawned, so a configuration error can
//! never leave files partially mutated. Invocation is strictly sequential
//! and aborts on the first non-zero exit; files already encoded earlier in
//! the loop are not rolled back.

use log::{debug, info};

use crate::EncodeSummary;
use crate::command::{format_command, render_args};
use crate::config::EncodeOptions;
use crate::error::{CoreError, CoreResult};
use crate::external::EncoderInvoker;
use crate::selection::FileSelection;

/// Runs the encoder over every file matched by the given selections.
///
/// Generic over the invoker so tests can substitute a scripted
/// implementation; production callers pass
/// [`ProcessInvoker`](crate::external::ProcessInvoker).
///
/// Selections are processed in registration order, each resolved at most
/// once. Entries that are not regular files are skipped silently; the
/// encoder only ever sees regular files. The first non-zero encoder exit
/// aborts the run with the captured output and the exact command line.
///
/// # Examples
///
/// ```rust,no_run
/// use zendenc_core::{EncodeOptions, FileSelection, encode_files};
/// use zendenc_core::external::ProcessInvoker;
/// use std::path::PathBuf;
///
/// let options = EncodeOptions::new(PathBuf::from("/opt/zend/bin/zendenc"));
/// let selection = FileSelection::new(
///     "sources",
///     PathBuf::from("/srv/app"),
///     vec!["**/*.php".to_string()],
///     vec!["vendor/**".to_string()],
/// );
///
/// let summary = encode_files(&ProcessInvoker, &options, &[selection]).unwrap();
/// println!("Encoded files: {}", summary.encoded);
/// ```
pub fn encode_files<I: EncoderInvoker>(
    invoker: &I,
    options: &EncodeOptions,
    selections: &[FileSelection],
) -> CoreResult<EncodeSummary> {
    options.validate()?;

    if selections.is_empty() {
        return Err(CoreError::Config(
            "at least one fileset must be supplied".to_string(),
        ));
    }

    // The rendered tokens do not vary per file; render once for the run.
    let args = render_args(options);

    let mut encoded: u64 = 0;

    for selection in selections {
        let files = selection.resolve()?;

        for rel in files {
            let joined = selection.base_dir().join(rel);

            // Directories and other non-regular entries are never passed to
            // the encoder.
            if !joined.is_file() {
                debug!("Skipping non-regular entry {}", joined.display());
                continue;
            }

            // The encoder is always handed an absolute path.
            let path = if joined.is_absolute() {
                joined
            } else {
                std::env::current_dir()?.join(joined)
            };

            debug!("Encoding {}", path.display());

            let command = format_command(&options.encoder_path, &args, &path);
            debug!("Running: {}", command);

            let result = invoker.invoke(&options.encoder_path, &args, &path)?;
            if !result.success() {
                return Err(CoreError::EncodingFailed {
                    command,
                    code: result.exit_code,
                    output: result.output,
                });
            }

            encoded += 1;
        }
    }

    info!("Encoded files: {}", encoded);

    Ok(EncodeSummary { encoded })
}

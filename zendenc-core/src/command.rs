//! Command rendering: turning an option set into the encoder's argument list.
//!
//! The rendered tokens do not vary per file, so the driver renders once per
//! run and appends the file path at each invocation. Ordering and precedence
//! are fixed: the encoder tolerates flag reordering but is sensitive to
//! which of two conflicting options is present, so exactly one of each
//! conflicting pair is ever emitted.

use std::path::Path;

use crate::config::{EncodeOptions, SigningMode, SourceDisposition};

/// Renders the option set into an ordered argument list, without a file path.
///
/// Pure function of the options: the same input always produces the
/// identical token sequence.
///
/// Precedence rules:
/// - a rename extension suppresses `--delete-source`
/// - a prolog file suppresses `--no-header`
/// - signing and licensing are mutually exclusive by construction
pub fn render_args(options: &EncodeOptions) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();

    match &options.source_disposition {
        SourceDisposition::Rename(ext) => {
            args.push("--rename-source".to_string());
            args.push(ext.clone());
        }
        SourceDisposition::Delete => {
            args.push("--delete-source".to_string());
        }
    }

    // Both tag options are always emitted; they carry explicit on/off values.
    args.push("--short-tags".to_string());
    args.push(on_off(options.short_tags).to_string());
    args.push("--asp-tags".to_string());
    args.push(on_off(options.asp_tags).to_string());

    if options.use_crypto {
        args.push("--use-crypto".to_string());
    }

    if options.ignore_file_modes {
        args.push("--ignore-file-modes".to_string());
    }

    if options.force_encode {
        args.push("--force-encode".to_string());
    }

    if let Some(date) = options.expires {
        args.push("--expires".to_string());
        args.push(date.format("%Y-%m-%d").to_string());
    }

    // Header control: an embedded prolog overrides header suppression.
    if let Some(prolog) = &options.prolog_file {
        args.push("--prolog-filename".to_string());
        args.push(prolog.display().to_string());
    } else if options.no_header {
        args.push("--no-header".to_string());
    }

    if options.obfuscation_level > 0 {
        args.push("--obfuscation-level".to_string());
        args.push(options.obfuscation_level.to_string());
    }

    if options.encoded_only {
        args.push("--encoded-only".to_string());
    }

    // An explicitly configured zero mask is meaningful and passed through.
    if let Some(mask) = options.optimization_mask {
        args.push("--optimizations".to_string());
        args.push(mask.to_string());
    }

    match &options.signing {
        SigningMode::Sign {
            product,
            private_key,
        } => {
            args.push("--sign-product".to_string());
            args.push(product.clone());
            args.push("--private-key".to_string());
            args.push(private_key.display().to_string());
        }
        SigningMode::License {
            product,
            private_key,
        } => {
            args.push("--license-product".to_string());
            args.push(product.clone());
            args.push("--private-key".to_string());
            args.push(private_key.display().to_string());
        }
        SigningMode::None => {}
    }

    args
}

/// Joins a full invocation into a single display string for logs and error
/// messages. The process itself is always given the argument array, never
/// this string.
pub fn format_command(program: &Path, args: &[String], file: &Path) -> String {
    let mut parts = Vec::with_capacity(args.len() + 2);
    parts.push(program.display().to_string());
    parts.extend(args.iter().cloned());
    parts.push(file.display().to_string());
    parts.join(" ")
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

//! Implementation of the 'encode' subcommand.
//!
//! Translates CLI flags or a TOML job manifest into a zendenc-core option
//! set plus filesets, then delegates to the core driver.

use crate::cli::EncodeArgs;
use crate::error::CliResult;

use zendenc_core::config::{EncodeOptions, SigningMode, SourceDisposition};
use zendenc_core::external::ProcessInvoker;
use zendenc_core::manifest::EncodeJob;
use zendenc_core::selection::FileSelection;
use zendenc_core::{CoreError, encode_files};

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

/// Builds the run from the arguments and executes it.
pub fn run_encode(args: EncodeArgs) -> CliResult<()> {
    let start_time = Instant::now();

    let (options, selections) = if let Some(manifest_path) = &args.manifest {
        let root = manifest_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        EncodeJob::load(manifest_path)?.into_parts(&root)?
    } else {
        build_from_flags(args)?
    };

    let summary = encode_files(&ProcessInvoker, &options, &selections)?;

    info!(
        "Run completed: {} file(s) encoded in {:.1}s",
        summary.encoded,
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Translates flag-style arguments into an option set and a single fileset.
fn build_from_flags(args: EncodeArgs) -> CliResult<(EncodeOptions, Vec<FileSelection>)> {
    let encoder_path = args.encoder_path.ok_or_else(|| {
        CoreError::Config("--encoder is required unless --manifest is given".to_string())
    })?;

    let base_dir = args.base_dir.ok_or_else(|| {
        CoreError::Config("--dir is required unless --manifest is given".to_string())
    })?;

    let mut options = EncodeOptions::new(encoder_path);

    if let Some(ext) = args.rename_source_ext {
        options.source_disposition = SourceDisposition::Rename(ext);
    }

    options.short_tags = !args.no_short_tags;
    options.asp_tags = args.asp_tags;
    options.no_header = args.no_header;
    options.use_crypto = args.use_crypto;
    options.encoded_only = args.encoded_only;
    options.force_encode = args.force_encode;
    options.ignore_file_modes = args.ignore_file_modes;
    options.expires = args.expires;
    options.obfuscation_level = args.obfuscation_level;
    options.optimization_mask = args.optimization_mask;
    options.prolog_file = args.prolog_file;

    // clap rejects --sign-product together with --license-product.
    options.signing = if let Some(product) = args.sign_product {
        SigningMode::Sign {
            product,
            private_key: args.private_key.unwrap_or_default(),
        }
    } else if let Some(product) = args.license_product {
        SigningMode::License {
            product,
            private_key: args.private_key.unwrap_or_default(),
        }
    } else {
        SigningMode::None
    };

    let selection = FileSelection::new("cli", base_dir, args.include, args.exclude);

    Ok((options, vec![selection]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse_args(argv: &[&str]) -> EncodeArgs {
        let mut full = vec!["zendenc", "encode"];
        full.extend_from_slice(argv);
        match crate::cli::Cli::try_parse_from(full).unwrap().command {
            crate::cli::Commands::Encode(args) => args,
        }
    }

    #[test]
    fn test_flags_map_to_options() {
        let args = parse_args(&[
            "--encoder",
            "/opt/zend/bin/zendenc",
            "--dir",
            "/srv/app",
            "--include",
            "**/*.php",
            "--exclude",
            "vendor/**",
            "--rename-source",
            "bak",
            "--no-short-tags",
            "--asp-tags",
            "--expires",
            "2027-06-30",
            "--obfuscation-level",
            "2",
            "--optimizations",
            "0",
        ]);

        let (options, selections) = build_from_flags(args).unwrap();

        assert_eq!(options.encoder_path, PathBuf::from("/opt/zend/bin/zendenc"));
        assert_eq!(
            options.source_disposition,
            SourceDisposition::Rename("bak".to_string())
        );
        assert!(!options.short_tags);
        assert!(options.asp_tags);
        assert_eq!(options.obfuscation_level, 2);
        assert_eq!(options.optimization_mask, Some(0));
        assert_eq!(
            options.expires.map(|d| d.to_string()),
            Some("2027-06-30".to_string())
        );

        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0].base_dir(), Path::new("/srv/app"));
    }

    #[test]
    fn test_sign_product_maps_to_signing_mode() {
        let args = parse_args(&[
            "--encoder",
            "/opt/zend/bin/zendenc",
            "--dir",
            "/srv/app",
            "--sign-product",
            "MyApp",
            "--private-key",
            "/etc/keys/private.pem",
        ]);

        let (options, _) = build_from_flags(args).unwrap();
        assert_eq!(
            options.signing,
            SigningMode::Sign {
                product: "MyApp".to_string(),
                private_key: PathBuf::from("/etc/keys/private.pem"),
            }
        );
    }

    #[test]
    fn test_missing_dir_is_config_error() {
        let args = parse_args(&["--encoder", "/opt/zend/bin/zendenc"]);
        let result = build_from_flags(args);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_missing_encoder_is_config_error() {
        let args = parse_args(&["--dir", "/srv/app"]);
        let result = build_from_flags(args);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }
}

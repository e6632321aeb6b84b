// zendenc-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "zendenc: Zend Guard batch encoding tool",
    long_about = "Encodes PHP sources in place by driving the Zend Guard encoder binary via the zendenc-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encodes the files matched by one or more filesets
    Encode(EncodeArgs),
}

#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// Path to the Zend Guard encoder binary.
    /// Can also be set via the ZENDENC_ENCODER environment variable.
    /// Ignored when --manifest is given.
    #[arg(long = "encoder", value_name = "ENCODER_PATH", env = "ZENDENC_ENCODER")]
    pub encoder_path: Option<PathBuf>,

    /// TOML job manifest defining the options and filesets for this run
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "MANIFEST",
        conflicts_with_all = [
            "base_dir", "include", "exclude", "rename_source_ext",
            "no_short_tags", "asp_tags", "no_header", "use_crypto",
            "encoded_only", "force_encode", "ignore_file_modes", "expires",
            "obfuscation_level", "optimization_mask", "sign_product",
            "license_product", "private_key", "prolog_file",
        ]
    )]
    pub manifest: Option<PathBuf>,

    /// Base directory of the fileset
    #[arg(short = 'd', long = "dir", value_name = "BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Include glob pattern, relative to the base directory (repeatable;
    /// default: every file under the base directory)
    #[arg(long = "include", value_name = "GLOB")]
    pub include: Vec<String>,

    /// Exclude glob pattern (repeatable; wins over includes)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Move each original to <file>.<EXT> instead of deleting it
    #[arg(long = "rename-source", value_name = "EXT")]
    pub rename_source_ext: Option<String>,

    /// Disable short PHP tag ("<?") recognition (on by default)
    #[arg(long)]
    pub no_short_tags: bool,

    /// Enable ASP tag ("<%") recognition
    #[arg(long)]
    pub asp_tags: bool,

    /// Omit the PHP-compatible loader header from encoded files
    #[arg(long)]
    pub no_header: bool,

    /// Use cryptography when encoding the source
    #[arg(long)]
    pub use_crypto: bool,

    /// Generated files cooperate only with other encoded files
    #[arg(long)]
    pub encoded_only: bool,

    /// Allow re-encoding files that are already encoded
    #[arg(long)]
    pub force_encode: bool,

    /// Do not preserve ownership, permissions and timestamps
    #[arg(long)]
    pub ignore_file_modes: bool,

    /// Expiry date of encoded files (yyyy-mm-dd)
    #[arg(long, value_name = "DATE")]
    pub expires: Option<NaiveDate>,

    /// Obfuscation level; 0 disables obfuscation
    #[arg(long, value_name = "LEVEL", default_value_t = 0)]
    pub obfuscation_level: u32,

    /// Optimizer pass bit-mask
    #[arg(long = "optimizations", value_name = "MASK")]
    pub optimization_mask: Option<u32>,

    /// Product name to sign encoded files with (requires --private-key)
    #[arg(long, value_name = "NAME", conflicts_with = "license_product")]
    pub sign_product: Option<String>,

    /// Product name to license encoded files for (requires --private-key)
    #[arg(long, value_name = "NAME")]
    pub license_product: Option<String>,

    /// Private key used for signing or licensing
    #[arg(long, value_name = "KEY_PATH")]
    pub private_key: Option<PathBuf>,

    /// File embedded into the header of every encoded file (overrides --no-header)
    #[arg(long, value_name = "PROLOG_PATH")]
    pub prolog_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sign_and_license_conflict() {
        let result = Cli::try_parse_from([
            "zendenc",
            "encode",
            "--dir",
            "/srv/app",
            "--sign-product",
            "MyApp",
            "--license-product",
            "MyApp",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_manifest_conflicts_with_fileset_flags() {
        let result = Cli::try_parse_from([
            "zendenc",
            "encode",
            "--manifest",
            "encode.toml",
            "--dir",
            "/srv/app",
        ]);
        assert!(result.is_err());
    }
}

//! TOML job manifest: declarative description of one encoding run.
//!
//! A manifest carries the full option set plus one or more filesets, so a
//! run can be versioned alongside the project it encodes:
//!
//! ```toml
//! [options]
//! encoder = "/opt/zend/bin/zendenc"
//! rename_source_ext = "bak"
//! obfuscation_level = 2
//!
//! [[fileset]]
//! dir = "src"
//! include = ["**/*.php"]
//! exclude = ["vendor/**"]
//! ```
//!
//! Fileset directories may be relative; they are resolved against the
//! directory containing the manifest file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::{DEFAULT_SHORT_TAGS, EncodeOptions, SigningMode, SourceDisposition};
use crate::error::{CoreError, CoreResult};
use crate::selection::FileSelection;

/// A parsed job manifest, not yet translated into core types.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncodeJob {
    pub options: ManifestOptions,

    #[serde(default, rename = "fileset")]
    pub filesets: Vec<ManifestFileset>,
}

/// The `[options]` table. Field names follow the encoder's vocabulary;
/// everything except the encoder path is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestOptions {
    pub encoder: PathBuf,

    pub rename_source_ext: Option<String>,

    #[serde(default = "default_short_tags")]
    pub short_tags: bool,

    #[serde(default)]
    pub asp_tags: bool,

    #[serde(default)]
    pub no_header: bool,

    #[serde(default)]
    pub use_crypto: bool,

    #[serde(default)]
    pub encoded_only: bool,

    #[serde(default)]
    pub force_encode: bool,

    #[serde(default)]
    pub ignore_file_modes: bool,

    /// Expiry date as yyyy-mm-dd.
    pub expires: Option<String>,

    #[serde(default)]
    pub obfuscation_level: u32,

    pub optimizations: Option<u32>,

    pub sign_product: Option<String>,

    pub license_product: Option<String>,

    pub private_key: Option<PathBuf>,

    pub prolog_file: Option<PathBuf>,
}

/// One `[[fileset]]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestFileset {
    pub dir: PathBuf,

    pub name: Option<String>,

    #[serde(default)]
    pub include: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_short_tags() -> bool {
    DEFAULT_SHORT_TAGS
}

impl EncodeJob {
    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!(
                "cannot read job manifest {}: {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&text).map_err(|e| {
            CoreError::Config(format!("invalid job manifest {}: {}", path.display(), e))
        })
    }

    /// Translates the manifest into a validated-ready option set and its
    /// filesets. `root` is the directory relative fileset paths are resolved
    /// against, normally the manifest's parent directory.
    pub fn into_parts(self, root: &Path) -> CoreResult<(EncodeOptions, Vec<FileSelection>)> {
        let mut options = EncodeOptions::new(self.options.encoder);

        if let Some(ext) = self.options.rename_source_ext {
            options.source_disposition = SourceDisposition::Rename(ext);
        }

        options.short_tags = self.options.short_tags;
        options.asp_tags = self.options.asp_tags;
        options.no_header = self.options.no_header;
        options.use_crypto = self.options.use_crypto;
        options.encoded_only = self.options.encoded_only;
        options.force_encode = self.options.force_encode;
        options.ignore_file_modes = self.options.ignore_file_modes;
        options.obfuscation_level = self.options.obfuscation_level;
        options.optimization_mask = self.options.optimizations;

        if let Some(date) = self.options.expires {
            let parsed = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
                CoreError::Config(format!(
                    "invalid expires date '{}' (expected yyyy-mm-dd): {}",
                    date, e
                ))
            })?;
            options.expires = Some(parsed);
        }

        options.signing = match (self.options.sign_product, self.options.license_product) {
            (Some(_), Some(_)) => {
                return Err(CoreError::Config(
                    "sign_product and license_product are mutually exclusive".to_string(),
                ));
            }
            (Some(product), None) => SigningMode::Sign {
                product,
                private_key: self.options.private_key.unwrap_or_default(),
            },
            (None, Some(product)) => SigningMode::License {
                product,
                private_key: self.options.private_key.unwrap_or_default(),
            },
            (None, None) => SigningMode::None,
        };

        options.prolog_file = self.options.prolog_file;

        let selections = self
            .filesets
            .into_iter()
            .enumerate()
            .map(|(index, fileset)| {
                let name = fileset
                    .name
                    .unwrap_or_else(|| format!("fileset-{}", index + 1));
                let dir = if fileset.dir.is_absolute() {
                    fileset.dir
                } else {
                    root.join(fileset.dir)
                };
                FileSelection::new(&name, dir, fileset.include, fileset.exclude)
            })
            .collect();

        Ok((options, selections))
    }
}

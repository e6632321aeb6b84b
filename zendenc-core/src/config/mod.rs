//! Configuration structures and constants for the zendenc-core library.
//!
//! This module provides the encoder option model: every knob the Zend Guard
//! encoder accepts, with the dependency rules between them. Options are
//! plain data; consistency is checked once, by an explicit [`EncodeOptions::validate`]
//! call, before a run touches any file.

mod builder;

use std::fs::File;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};

pub use builder::EncodeOptionsBuilder;

// Default constants

/// Short PHP tag ("<?") recognition is on unless explicitly disabled,
/// matching the encoder's own command-line default.
pub const DEFAULT_SHORT_TAGS: bool = true;

/// ASP tag ("<%") recognition is off unless explicitly enabled.
pub const DEFAULT_ASP_TAGS: bool = false;

/// Obfuscation level 0 disables obfuscation entirely.
pub const DEFAULT_OBFUSCATION_LEVEL: u32 = 0;

/// What happens to the original source file once its encoded replacement
/// has been written.
///
/// Deleting is the default. The only way off it is configuring a rename
/// extension; there is no independent delete toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDisposition {
    /// Permanently delete the original source file.
    Delete,
    /// Move the original to `<input_file>.<ext>` and encode in its place.
    Rename(String),
}

impl Default for SourceDisposition {
    fn default() -> Self {
        SourceDisposition::Delete
    }
}

/// Signing or licensing mode for encoded files.
///
/// Signing and licensing are mutually exclusive by construction; both
/// require a product name and a readable private key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SigningMode {
    #[default]
    None,
    Sign {
        product: String,
        private_key: PathBuf,
    },
    License {
        product: String,
        private_key: PathBuf,
    },
}

/// Full option set for one encoding run.
///
/// Constructed from declarative configuration (CLI flags or a TOML job
/// manifest) before any invocation, then treated as read-only: every
/// per-file invocation shares the same validated instance.
///
/// # Examples
///
/// ```rust
/// use zendenc_core::config::{EncodeOptions, SourceDisposition};
/// use std::path::PathBuf;
///
/// let mut options = EncodeOptions::new(PathBuf::from("/opt/zend/bin/zendenc"));
/// options.source_disposition = SourceDisposition::Rename("bak".to_string());
/// options.obfuscation_level = 2;
/// ```
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Path to the Zend Guard encoder binary
    pub encoder_path: PathBuf,

    /// Disposition of the original source after encoding
    pub source_disposition: SourceDisposition,

    /// Short PHP tag ("<?") recognition
    pub short_tags: bool,

    /// ASP tag ("<%") recognition
    pub asp_tags: bool,

    /// Omit the PHP-compatible loader header from encoded files.
    /// Overridden by `prolog_file` when both are set.
    pub no_header: bool,

    /// Use cryptography when encoding the source
    pub use_crypto: bool,

    /// Generated files cooperate only with other encoded files from the
    /// same company association
    pub encoded_only: bool,

    /// Allow re-encoding files that are already encoded
    pub force_encode: bool,

    /// Do not preserve ownership, permissions and timestamps of encoded files
    pub ignore_file_modes: bool,

    /// Expiry date of encoded files, rendered as yyyy-mm-dd
    pub expires: Option<NaiveDate>,

    /// Obfuscation level; 0 disables obfuscation
    pub obfuscation_level: u32,

    /// Optimizer pass bit-mask. `Some(0)` is meaningful (all passes off)
    /// and is passed through to the encoder.
    pub optimization_mask: Option<u32>,

    /// Signing or licensing of encoded files
    pub signing: SigningMode,

    /// File whose contents are embedded into the header of every encoded
    /// file. Takes precedence over `no_header`.
    pub prolog_file: Option<PathBuf>,
}

impl EncodeOptions {
    /// Creates an option set with the encoder defaults: delete the source,
    /// short tags on, asp tags off, everything else disabled.
    pub fn new(encoder_path: PathBuf) -> Self {
        Self {
            encoder_path,
            source_disposition: SourceDisposition::default(),
            short_tags: DEFAULT_SHORT_TAGS,
            asp_tags: DEFAULT_ASP_TAGS,
            no_header: false,
            use_crypto: false,
            encoded_only: false,
            force_encode: false,
            ignore_file_modes: false,
            expires: None,
            obfuscation_level: DEFAULT_OBFUSCATION_LEVEL,
            optimization_mask: None,
            signing: SigningMode::None,
            prolog_file: None,
        }
    }

    /// Verifies that the option set is internally consistent and that every
    /// referenced file exists.
    ///
    /// Called by the driver before any fileset is resolved or any process is
    /// spawned; a violation aborts the run with a configuration error naming
    /// the failed invariant.
    pub fn validate(&self) -> CoreResult<()> {
        if self.encoder_path.as_os_str().is_empty() {
            return Err(CoreError::Config(
                "encoder path must be specified".to_string(),
            ));
        }

        if !self.encoder_path.is_file() {
            return Err(CoreError::Config(format!(
                "encoder binary not found at {}",
                self.encoder_path.display()
            )));
        }

        // Signing and licensing both need a product name and a readable
        // private key.
        match &self.signing {
            SigningMode::Sign {
                product,
                private_key,
            }
            | SigningMode::License {
                product,
                private_key,
            } => {
                if product.trim().is_empty() {
                    return Err(CoreError::Config(
                        "signing or licensing requested but product name not provided"
                            .to_string(),
                    ));
                }
                if private_key.as_os_str().is_empty() {
                    return Err(CoreError::Config(
                        "signing or licensing requested but private key path not provided"
                            .to_string(),
                    ));
                }
                if let Err(e) = File::open(private_key) {
                    return Err(CoreError::Config(format!(
                        "private key {} is missing or unreadable: {}",
                        private_key.display(),
                        e
                    )));
                }
            }
            SigningMode::None => {}
        }

        if let Some(prolog) = &self.prolog_file {
            if !prolog.is_file() {
                return Err(CoreError::Config(format!(
                    "prolog file does not exist: {}",
                    prolog.display()
                )));
            }
        }

        Ok(())
    }
}

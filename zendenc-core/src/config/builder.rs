//! Builder pattern for [`EncodeOptions`].
//!
//! Provides a fluent API for assembling an option set from declarative
//! configuration. The encoder path is the one required value and is taken
//! by the constructor; everything else has an encoder-matching default.

use std::path::PathBuf;

use chrono::NaiveDate;

use super::{EncodeOptions, SigningMode, SourceDisposition};

/// Builder for creating [`EncodeOptions`] instances.
///
/// # Examples
///
/// ```rust
/// use zendenc_core::config::EncodeOptionsBuilder;
/// use std::path::PathBuf;
///
/// let options = EncodeOptionsBuilder::new(PathBuf::from("/opt/zend/bin/zendenc"))
///     .rename_source_ext("bak")
///     .obfuscation_level(2)
///     .encoded_only(true)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct EncodeOptionsBuilder {
    options: EncodeOptions,
}

impl EncodeOptionsBuilder {
    /// Creates a new builder around the default option set for the given
    /// encoder binary.
    pub fn new(encoder_path: PathBuf) -> Self {
        Self {
            options: EncodeOptions::new(encoder_path),
        }
    }

    /// Moves each original to `<input_file>.<ext>` instead of deleting it.
    pub fn rename_source_ext(mut self, ext: &str) -> Self {
        self.options.source_disposition = SourceDisposition::Rename(ext.to_string());
        self
    }

    /// Sets short PHP tag recognition.
    pub fn short_tags(mut self, enabled: bool) -> Self {
        self.options.short_tags = enabled;
        self
    }

    /// Sets ASP tag recognition.
    pub fn asp_tags(mut self, enabled: bool) -> Self {
        self.options.asp_tags = enabled;
        self
    }

    /// Omits the PHP-compatible loader header from encoded files.
    pub fn no_header(mut self, enabled: bool) -> Self {
        self.options.no_header = enabled;
        self
    }

    /// Enables cryptography during encoding.
    pub fn use_crypto(mut self, enabled: bool) -> Self {
        self.options.use_crypto = enabled;
        self
    }

    /// Restricts generated files to cooperating with other encoded files.
    pub fn encoded_only(mut self, enabled: bool) -> Self {
        self.options.encoded_only = enabled;
        self
    }

    /// Allows re-encoding already encoded files.
    pub fn force_encode(mut self, enabled: bool) -> Self {
        self.options.force_encode = enabled;
        self
    }

    /// Disables preservation of ownership, permissions and timestamps.
    pub fn ignore_file_modes(mut self, enabled: bool) -> Self {
        self.options.ignore_file_modes = enabled;
        self
    }

    /// Sets the expiry date of encoded files.
    pub fn expires(mut self, date: NaiveDate) -> Self {
        self.options.expires = Some(date);
        self
    }

    /// Sets the obfuscation level; 0 disables obfuscation.
    pub fn obfuscation_level(mut self, level: u32) -> Self {
        self.options.obfuscation_level = level;
        self
    }

    /// Sets the optimizer pass bit-mask. A mask of 0 is passed through.
    pub fn optimization_mask(mut self, mask: u32) -> Self {
        self.options.optimization_mask = Some(mask);
        self
    }

    /// Signs encoded files for the given product with the given private key.
    pub fn sign_product(mut self, product: &str, private_key: PathBuf) -> Self {
        self.options.signing = SigningMode::Sign {
            product: product.to_string(),
            private_key,
        };
        self
    }

    /// Licenses encoded files for the given product with the given private key.
    pub fn license_product(mut self, product: &str, private_key: PathBuf) -> Self {
        self.options.signing = SigningMode::License {
            product: product.to_string(),
            private_key,
        };
        self
    }

    /// Embeds the given file into the header of every encoded file.
    pub fn prolog_file(mut self, path: PathBuf) -> Self {
        self.options.prolog_file = Some(path);
        self
    }

    /// Returns the assembled option set.
    ///
    /// Consistency is not checked here; the driver validates once, before
    /// the run starts.
    pub fn build(self) -> EncodeOptions {
        self.options
    }
}

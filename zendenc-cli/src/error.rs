// zendenc-cli/src/error.rs
//
// Error handling for the CLI.

use zendenc_core::CoreResult;

/// Type alias for CLI results using CoreError.
///
/// The CLI surfaces core errors unchanged; there is no CLI-specific error
/// state beyond argument parsing, which clap reports itself.
pub type CliResult<T> = CoreResult<T>;

//! Domain error types for the wallet presentation core.

use thiserror::Error;

/// Errors raised by the autocomplete selector.
///
/// Both variants are caller bugs (bad setup or a host that fell out of sync
/// with the rendered suggestions) and are reported synchronously.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutocompleteError {
    /// The selector was configured with a result limit of zero.
    #[error("Invalid configuration: maximum results must be at least 1 (got {max_results})")]
    InvalidConfiguration { max_results: usize },

    /// A word was committed that is not in the last suggestion list.
    #[error("Invalid selection: '{word}' is not among the current suggestions")]
    InvalidSelection { word: String },
}

/// Typed error enum for wallet UI operations, allowing hosts to match on
/// specific failure modes instead of inspecting opaque `anyhow::Error` messages.
#[derive(Debug, Error)]
pub enum WalletUiError {
    /// Autocomplete selector misuse.
    #[error(transparent)]
    Autocomplete(#[from] AutocompleteError),

    /// Seed phrase is incomplete, has an unknown word, or fails its checksum.
    #[error("{0}")]
    InvalidSeed(String),

    /// A transaction references a wallet the directory does not know.
    #[error("No wallet with id {0}")]
    UnknownWallet(i32),

    /// Unexpected error from internal subsystems.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `std::result::Result<T, WalletUiError>`.
pub type Result<T> = std::result::Result<T, WalletUiError>;

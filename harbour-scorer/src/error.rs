//! Error types raised while loading hobby definitions.

use thiserror::Error;

/// Errors raised by a [`HobbyDefinitionSource`](crate::HobbyDefinitionSource).
///
/// Scoring never surfaces these: the catalogue cache logs them and falls
/// back to the previous or an empty catalogue.
#[derive(Debug, Error)]
pub enum HobbySourceError {
    /// Reading the definitions failed.
    #[error("failed to read hobby definitions from {origin}")]
    Read {
        /// Where the definitions were read from.
        origin: String,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The definitions could not be decoded.
    #[error("failed to decode hobby definitions from {origin}")]
    Decode {
        /// Where the definitions were read from.
        origin: String,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The source refused or could not serve the request.
    #[error("hobby definition source {origin} is unavailable: {reason}")]
    Unavailable {
        /// Name of the source.
        origin: String,
        /// Why the source was unavailable.
        reason: String,
    },
}

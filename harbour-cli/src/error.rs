//! Error types emitted by the Harbour CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Harbour CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name.
        field: &'static str,
        /// Environment variable that could supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// An input file could not be read.
    #[error("failed to read {field} file {path:?}: {source}")]
    ReadInput {
        /// Flag name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// An input file is not valid JSON of the expected shape.
    #[error("failed to parse {field} file {path:?}: {source}")]
    ParseInput {
        /// Flag name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The culture version is neither `v1` nor `v2`.
    #[error("invalid culture version {value:?} (expected v1 or v2)")]
    InvalidCultureVersion {
        /// Rejected value.
        value: String,
    },
    /// Serialising the ranking failed.
    #[error("failed to serialise results: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the ranking to stdout failed.
    #[error("failed to write results: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Writing the ranking to a file failed.
    #[error("failed to write results to {path:?}: {source}")]
    WriteOutputFile {
        /// Output path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}

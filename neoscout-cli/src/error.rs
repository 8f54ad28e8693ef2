//! Error types emitted by the neoscout CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the neoscout CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// `inspect` was invoked without a lookup target.
    #[error("inspect requires --pdes or --name")]
    MissingInspectTarget,
    /// Loading either catalog failed.
    #[error(transparent)]
    Load(#[from] neoscout_data::LoadError),
    /// The outfile extension selects no known writer.
    #[error("unsupported outfile extension for {path} (expected .csv or .json)")]
    UnsupportedOutfile {
        /// The rejected output path.
        path: Utf8PathBuf,
    },
    /// Creating the output file failed.
    #[error("failed to create outfile {path}")]
    CreateOutfile {
        /// The output path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing CSV results failed.
    #[error("failed to write CSV results to {path}")]
    WriteCsv {
        /// The output path.
        path: Utf8PathBuf,
        /// Underlying CSV failure.
        #[source]
        source: csv::Error,
    },
    /// Serializing JSON results failed.
    #[error("failed to serialize results to {path}")]
    SerializeResults {
        /// The output path.
        path: Utf8PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

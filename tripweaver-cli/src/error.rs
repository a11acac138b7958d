//! Top-level command line errors.

use camino::Utf8PathBuf;
use thiserror::Error;
use tripweaver_data::{DescriberBuildError, LoadError};

use crate::query::QueryError;

/// Everything that can stop a command line invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing failed or help was requested.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The POI dataset path does not point at a file.
    #[error("dataset not found at {path}")]
    MissingDataFile {
        /// The path that was checked.
        path: Utf8PathBuf,
    },
    /// The POI dataset could not be read or parsed.
    #[error("failed to load dataset {path}: {source}")]
    LoadCatalog {
        /// The dataset path.
        path: Utf8PathBuf,
        /// The underlying loader error.
        source: LoadError,
    },
    /// The free-text query could not be parsed.
    #[error(transparent)]
    Query(#[from] QueryError),
    /// The description provider could not be constructed.
    #[error("failed to set up description lookups: {0}")]
    BuildDescriber(#[from] DescriberBuildError),
    /// The finished plan could not be serialised to JSON.
    #[error("failed to serialise the plan: {0}")]
    SerialisePlan(#[from] serde_json::Error),
    /// Writing the rendered plan failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[from] std::io::Error),
}

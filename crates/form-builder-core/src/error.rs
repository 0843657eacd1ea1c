//! Error types for template retrieval and destination resolution

use std::path::PathBuf;
use thiserror::Error;

/// Failure to retrieve one template file
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch {url}: HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid template URL for '{file}': {reason}")]
    Url { file: String, reason: String },
}

/// Failure to locate where generated files go
///
/// These are raised before anything is written.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("The directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Could not load tsconfig.json in {}", .0.display())]
    MissingTsconfig(PathBuf),

    #[error("Could not read {}: {source}", .path.display())]
    ReadTsconfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse {}: {source}", .path.display())]
    ParseTsconfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not resolve import path {alias} using {}", .tsconfig.display())]
    UnresolvedAlias { alias: String, tsconfig: PathBuf },
}

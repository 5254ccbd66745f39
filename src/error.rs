//! Error taxonomy for a single `ght` invocation.
//!
//! Argument errors end the run with the usage exit code; everything else is
//! a runtime failure.

use reqwest::StatusCode;
use thiserror::Error;

use crate::constants::{CLIPBOARD_HINT, EXIT_FAILURE, EXIT_USAGE};

/// Bad command line: unknown flags, missing values, or an unusable URL source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("{0}")]
    Invalid(String),

    #[error("supply the URL via -u/--url or as a positional argument, not both")]
    Conflict,

    #[error("URL is empty")]
    EmptyUrl,

    #[error("URL is required")]
    MissingUrl,

    #[error("only one URL may be given")]
    TooManyUrls,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to fetch URL: {0}")]
    Request(#[source] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(StatusCode),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("title tag not found")]
    TitleNotFound,

    #[error("title was empty")]
    EmptyTitle,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("supported clipboard command not found ({})", CLIPBOARD_HINT)]
    NoSupportedCommand,
}

#[derive(Debug, Error)]
pub enum GhtError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl GhtError {
    pub fn exit_code(&self) -> u8 {
        match self {
            GhtError::Argument(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}

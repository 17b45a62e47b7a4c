use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrateError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("ADS dev key not found at {0}")]
    MissingDevKey(PathBuf),

    #[error("ADS dev key file {0} is empty")]
    EmptyDevKey(PathBuf),

    #[error("Could not determine the home directory to locate the ADS dev key")]
    HomeDirUnavailable,

    #[error("Invalid API token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API request error: {0}")]
    ApiRequestError(reqwest::Error),

    #[error("API returned an error status: {status} for {endpoint}")]
    ApiStatusError {
        status: reqwest::StatusCode,
        endpoint: String,
    },

    #[error("Failed to decode API JSON response: {0}")]
    ApiJsonDecodeError(reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CrateError>;

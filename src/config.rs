//! Locating the ADS API token.
use crate::error::{CrateError, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Path of the dev key file relative to the home directory.
const DEV_KEY_RELATIVE_PATH: &str = ".ads/dev_key";

pub fn default_dev_key_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEV_KEY_RELATIVE_PATH))
        .ok_or(CrateError::HomeDirUnavailable)
}

/// Reads the dev key from the first line of `path`.
pub fn load_dev_key(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(CrateError::MissingDevKey(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path)?;
    let key = contents.lines().next().unwrap_or("").trim();
    if key.is_empty() {
        return Err(CrateError::EmptyDevKey(path.to_path_buf()));
    }
    Ok(key.to_string())
}

/// Picks the token given explicitly, falling back to the dev key file.
pub fn resolve_token(explicit: Option<&str>, token_file: Option<&Path>) -> Result<String> {
    if let Some(token) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        info!("Using API token from command line / environment");
        return Ok(token.to_string());
    }

    let path = match token_file {
        Some(path) => path.to_path_buf(),
        None => default_dev_key_path()?,
    };
    info!("Reading ADS dev key from {:?}", path);
    load_dev_key(&path)
}

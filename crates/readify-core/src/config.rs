//! Centralized configuration for Readify.
//!
//! Constants for the catalog endpoint, storage layout and the HTTP user agent,
//! plus resolution of the default library path.

use std::path::PathBuf;
use std::time::Duration;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const USER_AGENT: &'static str = "readify/0.3";
}

/// Remote catalog (Google Books) configuration.
pub struct CatalogConfig;

impl CatalogConfig {
    pub const VOLUMES_URL: &'static str = "https://www.googleapis.com/books/v1/volumes";
    pub const API_KEY_ENV: &'static str = "GOOGLE_BOOKS_API_KEY";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    pub const DEFAULT_MAX_RESULTS: u32 = 5;
    /// Upper bound accepted by the volumes endpoint.
    pub const MAX_RESULTS_LIMIT: u32 = 40;
}

/// Storage layout.
pub struct PathsConfig;

impl PathsConfig {
    pub const APP_DIR_NAME: &'static str = "readify";
    pub const FALLBACK_DATA_DIR_NAME: &'static str = "data";
    pub const LIBRARY_FILENAME: &'static str = "library.json";
}

/// Default location of the library file.
///
/// `<platform data dir>/readify/library.json`, or `./data/library.json` when
/// the platform has no data directory.
pub fn default_library_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir
            .join(PathsConfig::APP_DIR_NAME)
            .join(PathsConfig::LIBRARY_FILENAME),
        None => PathBuf::from(PathsConfig::FALLBACK_DATA_DIR_NAME)
            .join(PathsConfig::LIBRARY_FILENAME),
    }
}

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.currencyapi.com";
const API_KEY_FILE: &str = "api.key";
const CACHE_FILE: &str = "exchange.json";

/// Locations of the credential and cache files plus the rate endpoint.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub config_dir: PathBuf,
    pub api_key_path: PathBuf,
    pub cache_path: PathBuf,
    pub base_url: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_dir = Self::default_config_dir()?;
        Ok(Self::in_dir(config_dir))
    }

    /// `~/.config/exchange` on Linux, the platform equivalent elsewhere.
    pub fn default_config_dir() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "exchange")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }

    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let config_dir = dir.as_ref().to_path_buf();
        Self {
            api_key_path: config_dir.join(API_KEY_FILE),
            cache_path: config_dir.join(CACHE_FILE),
            config_dir,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

/// Reads the API token, dropping any trailing line terminators.
pub fn load_api_key<P: AsRef<Path>>(path: P) -> Result<String> {
    let raw = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Cannot load API key from {}", path.as_ref().display()))?;

    let key = raw.trim_end_matches(['\n', '\r']);
    if key.is_empty() {
        anyhow::bail!("API key file {} is empty", path.as_ref().display());
    }
    debug!("Loaded API key from {}", path.as_ref().display());
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_in_dir_places_both_files() {
        let config = AppConfig::in_dir("/tmp/exchange");
        assert_eq!(config.api_key_path, PathBuf::from("/tmp/exchange/api.key"));
        assert_eq!(config.cache_path, PathBuf::from("/tmp/exchange/exchange.json"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = AppConfig::in_dir("/tmp/exchange").with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_load_api_key_strips_newline() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("api.key");
        fs::write(&path, "secret-token\n")?;

        assert_eq!(load_api_key(&path)?, "secret-token");

        fs::write(&path, "secret-token\r\n")?;
        assert_eq!(load_api_key(&path)?, "secret-token");
        Ok(())
    }

    #[test]
    fn test_load_api_key_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_api_key(dir.path().join("api.key"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Cannot load API key"));
    }

    #[test]
    fn test_load_api_key_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("api.key");
        fs::write(&path, "\n").unwrap();

        let result = load_api_key(&path);
        assert!(result.unwrap_err().to_string().contains("is empty"));
    }
}

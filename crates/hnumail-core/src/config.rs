//! Client configuration.
//!
//! Settings are read from `<config_dir>/hnumail/config.json` when present.
//! The `HNUMAIL_API_URL` environment variable overrides the backend URL.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Environment variable that overrides [`ClientConfig::base_url`].
pub const API_URL_ENV: &str = "HNUMAIL_API_URL";

/// Default backend address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Connection settings for the mail backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL (scheme, host, optional port and path prefix).
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Page size used for mailbox and user listings.
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            page_size: 20,
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at the given base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Directory holding the client's configuration files.
    #[must_use]
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hnumail")
    }

    /// Default location of `config.json`.
    #[must_use]
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Load configuration from the default path, then apply the
    /// `HNUMAIL_API_URL` override.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load() -> Result<Self> {
        Self::load_with_override(&Self::config_path(), std::env::var(API_URL_ENV).ok()).await
    }

    /// Load configuration from `path`, then replace the base URL with
    /// `base_url` when it is non-blank.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_with_override(path: &Path, base_url: Option<String>) -> Result<Self> {
        Ok(Self::load_from(path).await?.apply_base_url_override(base_url))
    }

    /// Load configuration from a specific file. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(path).await?;
        let config: Self = serde_json::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Replace the base URL with `value` when it is non-blank.
    #[must_use]
    pub fn apply_base_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value
            && !url.trim().is_empty()
        {
            self.base_url = url.trim().to_string();
        }
        self
    }

    /// Parse the base URL, normalized so relative endpoint paths join below it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for blank or non-HTTP URLs and
    /// [`Error::Url`] for unparseable ones.
    pub fn base_url(&self) -> Result<Url> {
        let raw = self.base_url.trim();
        if raw.is_empty() {
            return Err(Error::Config("base URL is empty".to_string()));
        }

        let mut url = Url::parse(raw)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported URL scheme '{}'",
                url.scheme()
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "https://mail.example.com"}"#).unwrap();
        assert_eq!(config.base_url, "https://mail.example.com");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::with_base_url("http://10.0.2.2:8080/mail");
        let url = config.base_url().unwrap();
        assert_eq!(url.as_str(), "http://10.0.2.2:8080/mail/");
        assert_eq!(
            url.join("api/auth/login").unwrap().as_str(),
            "http://10.0.2.2:8080/mail/api/auth/login"
        );
    }

    #[test]
    fn test_base_url_rejects_bad_input() {
        assert!(matches!(
            ClientConfig::with_base_url("  ").base_url(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ClientConfig::with_base_url("ftp://example.com").base_url(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ClientConfig::with_base_url("not a url").base_url(),
            Err(Error::Url(_))
        ));
    }

    #[test]
    fn test_override_ignores_blank_values() {
        let config = ClientConfig::default()
            .apply_base_url_override(Some("   ".to_string()))
            .apply_base_url_override(None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        let config = config.apply_base_url_override(Some(" https://api.test ".to_string()));
        assert_eq!(config.base_url, "https://api.test");
    }

    #[tokio::test]
    async fn test_load_from_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("hnumail-missing-config-test.json");
        let _ = std::fs::remove_file(&path);
        let config = ClientConfig::load_from(&path).await.unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path =
            std::env::temp_dir().join(format!("hnumail-config-test-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"base_url":"http://mail.local","page_size":50}"#).unwrap();

        let config = ClientConfig::load_from(&path).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.base_url, "http://mail.local");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.timeout_secs, 30);
    }

    #[tokio::test]
    async fn test_override_wins_over_file() {
        let path = std::env::temp_dir().join(format!(
            "hnumail-config-override-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"base_url":"http://mail.local"}"#).unwrap();

        let config =
            ClientConfig::load_with_override(&path, Some("https://api.test".to_string())).await;
        let untouched = ClientConfig::load_with_override(&path, None).await;
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.unwrap().base_url, "https://api.test");
        assert_eq!(untouched.unwrap().base_url, "http://mail.local");
    }

    #[tokio::test]
    async fn test_load_from_invalid_json() {
        let path = std::env::temp_dir().join(format!(
            "hnumail-config-invalid-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json").unwrap();

        let result = ClientConfig::load_from(&path).await;
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::Json(_))));
    }
}

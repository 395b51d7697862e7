#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod toml_config;

use crate::core::api::DEFAULT_TIMEOUT_SECONDS;
use crate::core::ConfigProvider;
use crate::domain::model::DEFAULT_BASE_URL;
use crate::utils::error::{BlockError, Result};
use crate::utils::validation::{validate_api_key, validate_range, validate_url, Validate};

pub use toml_config::TomlConfig;

pub const ENV_API_KEY: &str = "LAUNCHDARKLY_API_KEY";
pub const ENV_BASE_URL: &str = "LAUNCHDARKLY_BASE_URL";
pub const ENV_TIMEOUT_SECONDS: &str = "LAUNCHDARKLY_TIMEOUT_SECONDS";
pub const ENV_FORWARD_NULLS: &str = "LAUNCHDARKLY_FORWARD_NULLS";

pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// 合併後的執行設定；API key 可為空，此時每次呼叫必須自帶 app 設定
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub timeout_seconds: u64,
    pub forward_nulls: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            forward_nulls: false,
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "<redacted>" })
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("forward_nulls", &self.forward_nulls)
            .finish()
    }
}

impl Settings {
    /// 從環境變數讀取，未設定的項目保留預設值
    pub fn from_env() -> Result<Self> {
        Self::default().merge_lookup(|name| std::env::var(name).ok())
    }

    /// 以查詢函式覆蓋設定（方便測試時不動到行程環境變數）
    pub fn merge_lookup<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            self.api_key = api_key;
        }
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            self.base_url = base_url;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECONDS) {
            self.timeout_seconds =
                timeout
                    .trim()
                    .parse()
                    .map_err(|_| BlockError::InvalidConfigValueError {
                        field: ENV_TIMEOUT_SECONDS.to_string(),
                        value: timeout.clone(),
                        reason: "Expected a whole number of seconds".to_string(),
                    })?;
        }
        if let Some(forward_nulls) = lookup(ENV_FORWARD_NULLS) {
            self.forward_nulls = matches!(
                forward_nulls.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
        Ok(self)
    }

    /// TOML 檔案中有設定的項目覆蓋目前的值
    pub fn merge_toml(mut self, toml: &TomlConfig) -> Self {
        if let Some(api_key) = toml.api_key() {
            self.api_key = api_key.to_string();
        }
        if let Some(base_url) = toml.base_url() {
            self.base_url = base_url.to_string();
        }
        if let Some(timeout) = toml.timeout_seconds() {
            self.timeout_seconds = timeout;
        }
        if let Some(forward_nulls) = toml.forward_nulls() {
            self.forward_nulls = forward_nulls;
        }
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl ConfigProvider for Settings {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn forward_nulls(&self) -> bool {
        self.forward_nulls
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        if !self.api_key.is_empty() {
            validate_api_key("api_key", &self.api_key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.base_url, "https://app.launchdarkly.com");
        assert_eq!(settings.timeout_seconds, 30);
        assert!(!settings.forward_nulls);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_merge_lookup() {
        let settings = Settings::default()
            .merge_lookup(lookup(&[
                (ENV_API_KEY, "api-123"),
                (ENV_TIMEOUT_SECONDS, "5"),
                (ENV_FORWARD_NULLS, "true"),
            ]))
            .unwrap();

        assert_eq!(settings.api_key, "api-123");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout_seconds, 5);
        assert!(settings.forward_nulls);
    }

    #[test]
    fn test_merge_lookup_rejects_bad_timeout() {
        let err = Settings::default()
            .merge_lookup(lookup(&[(ENV_TIMEOUT_SECONDS, "soon")]))
            .unwrap_err();
        assert!(matches!(err, BlockError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let settings = Settings {
            timeout_seconds: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let settings = Settings::default().with_api_key("api-secret");
        assert!(!format!("{:?}", settings).contains("api-secret"));
    }
}

use crate::utils::error::{BlockError, Result};
use crate::utils::validation::{validate_api_key, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use super::MAX_TIMEOUT_SECONDS;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub launchdarkly: LaunchDarklySection,
    #[serde(default)]
    pub http: HttpSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchDarklySection {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpSection {
    pub timeout_seconds: Option<u64>,
    /// 是否把值為 null 的欄位送進請求 body
    pub forward_nulls: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BlockError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LAUNCHDARKLY_API_KEY})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(api_key) = &self.launchdarkly.api_key {
            if env_var_pattern().is_match(api_key) {
                return Err(BlockError::ConfigValidationError {
                    field: "launchdarkly.api_key".to_string(),
                    message: "Referenced environment variable is not set".to_string(),
                });
            }
            validate_api_key("launchdarkly.api_key", api_key)?;
        }

        if let Some(base_url) = &self.launchdarkly.base_url {
            validate_url("launchdarkly.base_url", base_url)?;
        }

        if let Some(timeout) = self.http.timeout_seconds {
            validate_range("http.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        Ok(())
    }

    pub fn api_key(&self) -> Option<&str> {
        self.launchdarkly.api_key.as_deref()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.launchdarkly.base_url.as_deref()
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.http.timeout_seconds
    }

    pub fn forward_nulls(&self) -> Option<bool> {
        self.http.forward_nulls
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[launchdarkly]
api_key = "api-0123"
base_url = "https://app.eu.launchdarkly.com"

[http]
timeout_seconds = 10
forward_nulls = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api_key(), Some("api-0123"));
        assert_eq!(config.base_url(), Some("https://app.eu.launchdarkly.com"));
        assert_eq!(config.timeout_seconds(), Some(10));
        assert_eq!(config.forward_nulls(), Some(true));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.api_key().is_none());
        assert!(config.timeout_seconds().is_none());

        let settings = Settings::default().merge_toml(&config);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LDB_TEST_TOML_API_KEY", "api-from-env");

        let toml_content = r#"
[launchdarkly]
api_key = "${LDB_TEST_TOML_API_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_key(), Some("api-from-env"));

        std::env::remove_var("LDB_TEST_TOML_API_KEY");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[launchdarkly]
api_key = "${LDB_TEST_TOML_NEVER_SET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_key(), Some("${LDB_TEST_TOML_NEVER_SET}"));
        assert!(matches!(
            config.validate(),
            Err(BlockError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[launchdarkly]
base_url = "ftp://app.launchdarkly.com"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[http]\ntimeout_seconds = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[launchdarkly\napi_key = 1").unwrap_err();
        assert!(matches!(err, BlockError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[launchdarkly]\napi_key = \"api-file\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let settings = Settings::default().merge_toml(&config);
        assert_eq!(settings.api_key, "api-file");
    }
}

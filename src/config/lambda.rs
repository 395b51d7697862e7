use crate::config::Settings;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Lambda 執行環境的設定，只從環境變數讀取
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    settings: Settings,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            settings: Settings::from_env()?,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl From<Settings> for LambdaConfig {
    fn from(settings: Settings) -> Self {
        Self { settings }
    }
}

impl ConfigProvider for LambdaConfig {
    fn api_key(&self) -> &str {
        self.settings.api_key()
    }

    fn base_url(&self) -> &str {
        self.settings.base_url()
    }

    fn timeout_seconds(&self) -> u64 {
        self.settings.timeout_seconds()
    }

    fn forward_nulls(&self) -> bool {
        self.settings.forward_nulls()
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        self.settings.validate()?;
        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

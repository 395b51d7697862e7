use crate::config::{Settings, TomlConfig};
use crate::utils::error::{BlockError, Result};
use crate::utils::validation::{validate_file_extensions, Validate};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "ldblocks")]
#[command(about = "Run LaunchDarkly REST API blocks from the command line")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "LaunchDarkly API access token")]
    pub api_key: Option<String>,

    #[arg(long, global = true, help = "LaunchDarkly base URL")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Pretty-print JSON output")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List available blocks
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show a block's input and output schemas
    Describe { block: String },
    /// Execute a block and print its output
    Run {
        block: String,

        #[arg(long, conflicts_with = "input_file", help = "Inputs as a JSON object")]
        input: Option<String>,

        #[arg(long, help = "Read inputs from a JSON file")]
        input_file: Option<PathBuf>,
    },
}

impl CliConfig {
    /// 依優先順序合併設定：命令列參數 > TOML 檔 > 環境變數 > 預設值
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::from_env()?;

        if let Some(path) = &self.config {
            let toml = TomlConfig::from_file(path)?;
            toml.validate()?;
            settings = settings.merge_toml(&toml);
        }

        if let Some(api_key) = &self.api_key {
            settings = settings.with_api_key(api_key);
        }
        if let Some(base_url) = &self.base_url {
            settings = settings.with_base_url(base_url);
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// 讀取 `run` 的輸入；未提供時視為空物件
pub fn read_inputs(input: Option<&str>, input_file: Option<&PathBuf>) -> Result<Value> {
    let raw = match (input, input_file) {
        (Some(json), _) => json.to_string(),
        (None, Some(path)) => {
            validate_file_extensions(
                "input_file",
                &[path.to_string_lossy().into_owned()],
                &["json"],
            )?;
            std::fs::read_to_string(path)?
        }
        (None, None) => return Ok(Value::Object(Default::default())),
    };

    let value: Value = serde_json::from_str(&raw)?;
    if !value.is_object() {
        return Err(BlockError::InvalidFieldError {
            field: "inputs".to_string(),
            reason: "Inputs must be a JSON object".to_string(),
        });
    }
    Ok(value)
}

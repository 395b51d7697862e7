use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://app.launchdarkly.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// 輸入欄位的 JSON 型別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Any,
}

impl FieldKind {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Array => value.is_array(),
            FieldKind::Object => value.is_object(),
            FieldKind::Any => true,
        }
    }

    /// JSON Schema 的 `type`，`Any` 沒有對應型別
    pub fn json_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::String => Some("string"),
            FieldKind::Number => Some("number"),
            FieldKind::Integer => Some("integer"),
            FieldKind::Boolean => Some("boolean"),
            FieldKind::Array => Some("array"),
            FieldKind::Object => Some("object"),
            FieldKind::Any => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldLocation {
    Path,
    Query,
    Body,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputField {
    pub name: String,
    pub kind: FieldKind,
    pub location: FieldLocation,
    pub required: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl InputField {
    pub fn path(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::String,
            location: FieldLocation::Path,
            required: true,
            description: String::new(),
        }
    }

    pub fn query(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            location: FieldLocation::Query,
            required: false,
            description: String::new(),
        }
    }

    pub fn body(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            location: FieldLocation::Body,
            required: false,
            description: String::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Json,
    /// LaunchDarkly semantic patch（`instructions` 陣列）
    SemanticPatch,
}

impl ContentType {
    pub fn header_value(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::SemanticPatch => "application/json; domain-model=launchdarkly.semanticpatch",
        }
    }
}

/// 宿主平台提供的應用層設定（`input.app.config`）
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub api_key: String,
    /// 未提供時沿用引擎預設值，最後才退回 LaunchDarkly 官方位址
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl AppConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Some(base_url.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// 以呼叫端設定為主，缺漏的欄位由 `defaults` 補上
    pub fn with_fallback(&self, defaults: Option<&AppConfig>) -> AppConfig {
        let Some(defaults) = defaults else {
            return self.clone();
        };
        AppConfig {
            api_key: if self.api_key.is_empty() {
                defaults.api_key.clone()
            } else {
                self.api_key.clone()
            },
            base_url: self.base_url.clone().or_else(|| defaults.base_url.clone()),
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppContext {
    pub config: AppConfig,
}

/// 一次 block 觸發事件：應用設定加上輸入欄位
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockInvocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<AppContext>,
    #[serde(default)]
    pub inputs: Map<String, Value>,
}

impl BlockInvocation {
    pub fn new(inputs: Map<String, Value>) -> Self {
        Self { app: None, inputs }
    }

    pub fn with_app_config(mut self, config: AppConfig) -> Self {
        self.app = Some(AppContext { config });
        self
    }

    /// 從 JSON 物件建立；非物件輸入視為錯誤
    pub fn from_inputs(inputs: Value) -> Option<Self> {
        match inputs {
            Value::Object(map) => Some(Self::new(map)),
            _ => None,
        }
    }

    pub fn app_config(&self) -> Option<&AppConfig> {
        self.app.as_ref().map(|app| &app.config)
    }
}

/// Block 執行結果
#[derive(Debug, Clone)]
pub struct BlockOutcome {
    pub block_id: String,
    pub status: u16,
    pub output: Value,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_kind_matches() {
        assert!(FieldKind::String.matches(&json!("")));
        assert!(FieldKind::Number.matches(&json!(1.5)));
        assert!(FieldKind::Integer.matches(&json!(3)));
        assert!(!FieldKind::Integer.matches(&json!(3.5)));
        assert!(FieldKind::Boolean.matches(&json!(false)));
        assert!(FieldKind::Array.matches(&json!([])));
        assert!(FieldKind::Object.matches(&json!({})));
        assert!(!FieldKind::Object.matches(&json!([])));
        assert!(FieldKind::Any.matches(&Value::Null));
    }

    #[test]
    fn test_invocation_deserializes_host_shape() {
        let invocation: BlockInvocation = serde_json::from_value(json!({
            "app": { "config": { "apiKey": "api-123", "baseUrl": "https://ld.example.com" } },
            "inputs": { "projectKey": "default" }
        }))
        .unwrap();

        let config = invocation.app_config().unwrap();
        assert_eq!(config.api_key, "api-123");
        assert_eq!(config.base_url(), "https://ld.example.com");
        assert_eq!(invocation.inputs["projectKey"], "default");
    }

    #[test]
    fn test_app_config_defaults_base_url_and_redacts_key() {
        let config: AppConfig = serde_json::from_value(json!({ "apiKey": "secret" })).unwrap();
        assert_eq!(config.base_url, None);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(!format!("{:?}", config).contains("secret"));
    }

    #[test]
    fn test_app_config_falls_back_to_defaults() {
        let defaults = AppConfig::new("api-default", "http://localhost:8080");

        let key_only: AppConfig = serde_json::from_value(json!({ "apiKey": "api-other" })).unwrap();
        let merged = key_only.with_fallback(Some(&defaults));
        assert_eq!(merged.api_key, "api-other");
        assert_eq!(merged.base_url(), "http://localhost:8080");

        let explicit = AppConfig::new("api-other", "https://ld.example.com");
        assert_eq!(explicit.with_fallback(Some(&defaults)).base_url(), "https://ld.example.com");

        assert_eq!(key_only.with_fallback(None).base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_method_serializes_uppercase() {
        assert_eq!(serde_json::to_value(HttpMethod::Patch).unwrap(), json!("PATCH"));
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}

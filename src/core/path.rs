use crate::utils::error::{BlockError, Result};
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder regex is valid"))
}

/// REST 路徑模板，例如 `/api/v2/flags/{projectKey}/{featureFlagKey}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    params: Vec<String>,
}

impl PathTemplate {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let mut params: Vec<String> = Vec::new();
        for caps in placeholder_regex().captures_iter(&raw) {
            let name = caps[1].to_string();
            if !params.contains(&name) {
                params.push(name);
            }
        }
        Self { raw, params }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// 模板中的路徑參數（依出現順序）
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// 以輸入值替換所有路徑參數。
    ///
    /// 任何參數缺少或型別不符都會在發出請求之前失敗。
    pub fn render(&self, block_id: &str, values: &Map<String, Value>) -> Result<RenderedPath> {
        let mut substitutions = Vec::with_capacity(self.params.len());
        for name in &self.params {
            let value = match values.get(name) {
                None | Some(Value::Null) => {
                    return Err(BlockError::MissingFieldError {
                        block: block_id.to_string(),
                        field: name.clone(),
                    })
                }
                Some(value) => path_value(name, value)?,
            };
            substitutions.push((name.as_str(), value));
        }

        let segments = self
            .raw
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                placeholder_regex()
                    .replace_all(segment, |caps: &regex::Captures| {
                        substitutions
                            .iter()
                            .find(|(name, _)| *name == &caps[1])
                            .map(|(_, value)| value.clone())
                            .unwrap_or_default()
                    })
                    .into_owned()
            })
            .collect();

        Ok(RenderedPath { segments })
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn path_value(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) if s.trim().is_empty() => Err(BlockError::InvalidFieldError {
            field: name.to_string(),
            reason: "path parameter cannot be empty".to_string(),
        }),
        // URL 正規化會吃掉 "." 與 ".." 段落，導致請求送到別的路由
        Value::String(s) if s == "." || s == ".." => Err(BlockError::InvalidFieldError {
            field: name.to_string(),
            reason: format!("path parameter cannot be '{}'", s),
        }),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(BlockError::InvalidFieldError {
            field: name.to_string(),
            reason: format!("path parameter must be a string or number, got {}", other),
        }),
    }
}

/// 已替換參數的路徑；每個段落在組 URL 時各自編碼
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPath {
    segments: Vec<String>,
}

impl RenderedPath {
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl From<&str> for RenderedPath {
    fn from(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl From<String> for RenderedPath {
    fn from(path: String) -> Self {
        RenderedPath::from(path.as_str())
    }
}

impl fmt::Display for RenderedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

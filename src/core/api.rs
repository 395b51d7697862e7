use crate::core::path::RenderedPath;
use crate::domain::model::{AppConfig, ContentType, HttpMethod};
use crate::utils::error::{BlockError, Result};
use crate::utils::validation::{validate_api_key, validate_url};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method};
use serde_json::{Map, Value};
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const API_VERSION_HEADER: &str = "LD-API-Version";
const BETA_API_VERSION: &str = "beta";

/// 選填欄位為 `null` 時的處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPolicy {
    #[default]
    Strip,
    Forward,
}

impl NullPolicy {
    pub fn from_forward_nulls(forward_nulls: bool) -> Self {
        if forward_nulls {
            NullPolicy::Forward
        } else {
            NullPolicy::Strip
        }
    }
}

/// 去除未設定的參數，避免把呼叫端沒給的選填欄位送成 `null`。
///
/// `0`、`false`、`""` 都會保留。
pub fn filter_defined_params<'a, I>(params: I, null_policy: NullPolicy) -> Map<String, Value>
where
    I: IntoIterator<Item = (&'a str, Option<&'a Value>)>,
{
    params
        .into_iter()
        .filter_map(|(name, value)| match (value, null_policy) {
            (None, _) => None,
            (Some(Value::Null), NullPolicy::Strip) => None,
            (Some(value), _) => Some((name.to_string(), value.clone())),
        })
        .collect()
}

pub fn build_http_client(timeout_seconds: u64) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("launchdarkly-blocks/", env!("CARGO_PKG_VERSION"))),
    );

    let client = Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?;
    Ok(client)
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: RenderedPath,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub content_type: ContentType,
    pub beta: bool,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<RenderedPath>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            content_type: ContentType::Json,
            beta: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

/// 已帶入 API key 與 base URL 的 LaunchDarkly REST 客戶端
#[derive(Clone)]
pub struct LaunchDarklyClient {
    http: Client,
    api_key: String,
    base_url: Url,
}

impl LaunchDarklyClient {
    pub fn new(http: Client, config: &AppConfig) -> Result<Self> {
        validate_api_key("apiKey", &config.api_key)?;
        validate_url("baseUrl", config.base_url())?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: Url::parse(config.base_url())?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn url_for(&self, path: &RenderedPath) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| BlockError::ConfigError {
                message: format!("Base URL cannot be a base: {}", self.base_url),
            })?;
            segments.pop_if_empty();
            segments.extend(path.segments());
        }
        Ok(url)
    }

    /// 以 method + path + 選填 body 呼叫 API
    pub async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value> {
        let mut request = ApiRequest::new(method, path);
        request.body = body;
        Ok(self.send(&request).await?.body)
    }

    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request.path)?;
        tracing::debug!("📡 {} {}", request.method, url);

        let mut builder = self
            .http
            .request(to_reqwest_method(request.method), url)
            .header(AUTHORIZATION, &self.api_key);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if request.beta {
            builder = builder.header(API_VERSION_HEADER, BETA_API_VERSION);
        }

        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, request.content_type.header_value())
                .body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!("LaunchDarkly API returned {}: {}", status.as_u16(), text);
            return Err(BlockError::ApiError {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            body: parse_body(&text),
        })
    }
}

impl std::fmt::Debug for LaunchDarklyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaunchDarklyClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// 空回應（例如 204）視為空物件；非 JSON 文字包成 `{"body": ...}`
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Object(Map::new());
    }

    serde_json::from_str(text).unwrap_or_else(|_| {
        let mut wrapped = Map::new();
        wrapped.insert("body".to_string(), Value::String(text.to_string()));
        Value::Object(wrapped)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_defined_params_drops_absent_fields() {
        let name = json!("New flag");
        let filtered = filter_defined_params(
            [("name", Some(&name)), ("description", None)],
            NullPolicy::Strip,
        );
        assert_eq!(Value::Object(filtered), json!({ "name": "New flag" }));
    }

    #[test]
    fn test_filter_defined_params_keeps_falsy_values() {
        let zero = json!(0);
        let no = json!(false);
        let empty = json!("");
        let filtered = filter_defined_params(
            [("limit", Some(&zero)), ("temporary", Some(&no)), ("description", Some(&empty))],
            NullPolicy::Strip,
        );
        assert_eq!(
            Value::Object(filtered),
            json!({ "limit": 0, "temporary": false, "description": "" })
        );
    }

    #[test]
    fn test_filter_defined_params_null_policy() {
        let null = Value::Null;
        let stripped = filter_defined_params([("description", Some(&null))], NullPolicy::Strip);
        assert!(stripped.is_empty());

        let forwarded = filter_defined_params([("description", Some(&null))], NullPolicy::Forward);
        assert_eq!(Value::Object(forwarded), json!({ "description": null }));
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(""), json!({}));
        assert_eq!(parse_body("  \n"), json!({}));
        assert_eq!(parse_body(r#"{"key":"abc"}"#), json!({ "key": "abc" }));
        assert_eq!(parse_body("ok"), json!({ "body": "ok" }));
    }

    #[test]
    fn test_url_for_encodes_segments_and_respects_base_path() {
        let config = AppConfig::new("api-key", "https://proxy.example.com/launchdarkly/");
        let client = LaunchDarklyClient::new(Client::new(), &config).unwrap();
        assert_eq!(client.base_url().as_str(), "https://proxy.example.com/launchdarkly/");

        let path = RenderedPath::from("/api/v2/flags/web");
        let url = client.url_for(&path).unwrap();
        assert_eq!(
            url.as_str(),
            "https://proxy.example.com/launchdarkly/api/v2/flags/web"
        );
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        assert!(LaunchDarklyClient::new(Client::new(), &AppConfig::new("", "https://app.launchdarkly.com")).is_err());
        assert!(LaunchDarklyClient::new(Client::new(), &AppConfig::new("key", "not a url")).is_err());
    }
}

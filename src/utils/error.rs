use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("LaunchDarkly API error: {status} - {body}")]
    ApiError { status: u16, body: String },

    #[error("Block '{block}' is missing required field '{field}'")]
    MissingFieldError { block: String, field: String },

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidFieldError { field: String, reason: String },

    #[error("Unknown block: {id}")]
    UnknownBlockError { id: String },

    #[error("Block '{id}' is already registered")]
    DuplicateBlockError { id: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BlockError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BlockError::HttpError(_) => ErrorCategory::Network,
            BlockError::ApiError { .. } => ErrorCategory::Api,
            BlockError::MissingFieldError { .. }
            | BlockError::InvalidFieldError { .. }
            | BlockError::UnknownBlockError { .. } => ErrorCategory::Input,
            BlockError::DuplicateBlockError { .. }
            | BlockError::ConfigError { .. }
            | BlockError::ConfigValidationError { .. }
            | BlockError::InvalidConfigValueError { .. }
            | BlockError::MissingConfigError { .. }
            | BlockError::UrlError(_) => ErrorCategory::Configuration,
            BlockError::IoError(_) | BlockError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤與 429/5xx 通常可以由宿主重試
            BlockError::HttpError(_) => ErrorSeverity::Medium,
            BlockError::ApiError { status, .. } if *status == 429 || *status >= 500 => {
                ErrorSeverity::Medium
            }
            BlockError::ApiError { .. } => ErrorSeverity::High,
            BlockError::MissingFieldError { .. }
            | BlockError::InvalidFieldError { .. }
            | BlockError::UnknownBlockError { .. } => ErrorSeverity::High,
            BlockError::IoError(_) | BlockError::DuplicateBlockError { .. } => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    /// HTTP 狀態碼（只有 API 錯誤才有）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            BlockError::ApiError { status, .. } => Some(*status),
            BlockError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BlockError::HttpError(_) => {
                "Check network connectivity and the configured base URL".to_string()
            }
            BlockError::ApiError { status: 401, .. } => {
                "Check that the LaunchDarkly API key is valid".to_string()
            }
            BlockError::ApiError { status: 403, .. } => {
                "The API key lacks permission for this resource; review its role".to_string()
            }
            BlockError::ApiError { status: 404, .. } => {
                "Verify the project, environment and resource keys".to_string()
            }
            BlockError::ApiError { status: 409, .. } => {
                "The resource already exists or was modified concurrently".to_string()
            }
            BlockError::ApiError { status: 429, .. } => {
                "Rate limited by LaunchDarkly; wait before retrying".to_string()
            }
            BlockError::ApiError { status, .. } if *status >= 500 => {
                "LaunchDarkly returned a server error; retry later".to_string()
            }
            BlockError::ApiError { .. } => {
                "Inspect the response body for the rejected field".to_string()
            }
            BlockError::MissingFieldError { field, .. } => {
                format!("Provide a value for '{}'", field)
            }
            BlockError::InvalidFieldError { field, .. } => {
                format!("Check the type of '{}' against the block input schema", field)
            }
            BlockError::UnknownBlockError { .. } => {
                "Run `ldblocks list` to see the available blocks".to_string()
            }
            BlockError::ConfigError { .. }
            | BlockError::ConfigValidationError { .. }
            | BlockError::InvalidConfigValueError { .. }
            | BlockError::MissingConfigError { .. }
            | BlockError::UrlError(_) => "Review the configuration file and flags".to_string(),
            BlockError::DuplicateBlockError { .. } => {
                "Block ids must be unique within a registry".to_string()
            }
            BlockError::IoError(_) => "Check file paths and permissions".to_string(),
            BlockError::SerializationError(_) => "Check that the input is valid JSON".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BlockError::HttpError(e) if e.is_timeout() => {
                "The request to LaunchDarkly timed out".to_string()
            }
            BlockError::HttpError(_) => "Could not reach the LaunchDarkly API".to_string(),
            BlockError::ApiError { status, body } => {
                format!("LaunchDarkly rejected the request ({}): {}", status, body)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BlockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_contains_status_and_body() {
        let err = BlockError::ApiError {
            status: 404,
            body: r#"{"code":"not_found"}"#.to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("not_found"));
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.category(), ErrorCategory::Api);
    }

    #[test]
    fn test_severity_for_retryable_statuses() {
        let rate_limited = BlockError::ApiError {
            status: 429,
            body: String::new(),
        };
        let server = BlockError::ApiError {
            status: 503,
            body: String::new(),
        };
        let bad_request = BlockError::ApiError {
            status: 400,
            body: String::new(),
        };
        assert_eq!(rate_limited.severity(), ErrorSeverity::Medium);
        assert_eq!(server.severity(), ErrorSeverity::Medium);
        assert_eq!(bad_request.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_missing_field_suggestion() {
        let err = BlockError::MissingFieldError {
            block: "get_feature_flag".to_string(),
            field: "projectKey".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.recovery_suggestion().contains("projectKey"));
    }
}

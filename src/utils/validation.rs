use crate::utils::error::{BlockError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BlockError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => {
                if url.cannot_be_a_base() {
                    return Err(BlockError::InvalidConfigValueError {
                        field: field_name.to_string(),
                        value: url_str.to_string(),
                        reason: "URL cannot be used as a base URL".to_string(),
                    });
                }
                Ok(())
            }
            scheme => Err(BlockError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BlockError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        if let Some(extension) = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            if !allowed_set.contains(extension) {
                return Err(BlockError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
        } else {
            return Err(BlockError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: "File has no extension or invalid filename".to_string(),
            });
        }
    }

    Ok(())
}

/// API key 不可為空，且錯誤訊息中不回顯其值
pub fn validate_api_key(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BlockError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(BlockError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "<redacted>".to_string(),
            reason: "API key cannot contain whitespace or control characters".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BlockError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://app.launchdarkly.com").is_ok());
        assert!(validate_url("base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_api_key() {
        assert!(validate_api_key("api_key", "api-1234").is_ok());
        assert!(validate_api_key("api_key", "   ").is_err());

        let err = validate_api_key("api_key", "api 1234").unwrap_err();
        assert!(!err.to_string().contains("api 1234"));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout_seconds", 30u64, 1, 300).is_ok());
        assert!(validate_range("timeout_seconds", 0u64, 1, 300).is_err());
        assert!(validate_range("timeout_seconds", 301u64, 1, 300).is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = vec!["launchdarkly.toml".to_string()];
        assert!(validate_file_extensions("config", &files, &["toml"]).is_ok());

        let invalid_files = vec!["launchdarkly.yaml".to_string()];
        assert!(validate_file_extensions("config", &invalid_files, &["toml"]).is_err());
    }
}

use crate::utils::error::{ConverterError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConverterError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 模型名稱會直接放進 URL 路徑，不允許斜線或空白
pub fn validate_model_name(field_name: &str, model: &str) -> Result<()> {
    validate_non_empty_string(field_name, model)?;
    if model.contains('/') || model.chars().any(char::is_whitespace) {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: model.to_string(),
            reason: "Model name cannot contain '/' or whitespace".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("gemini.base_url", "https://generativelanguage.googleapis.com").is_ok());
        assert!(validate_url("gemini.base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("gemini.base_url", "").is_err());
        assert!(validate_url("gemini.base_url", "invalid-url").is_err());
        assert!(validate_url("gemini.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("secrets.path", "secrets.toml").is_ok());
        assert!(validate_path("secrets.path", "").is_err());
        assert!(validate_path("secrets.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_model_name() {
        assert!(validate_model_name("gemini.model", "gemini-1.5-pro").is_ok());
        assert!(validate_model_name("gemini.model", "  ").is_err());
        assert!(validate_model_name("gemini.model", "models/gemini").is_err());
        assert!(validate_model_name("gemini.model", "gemini pro").is_err());
    }
}

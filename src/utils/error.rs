use thiserror::Error;

/// 輸入驗證錯誤。Display 即為顯示給使用者的原文。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid number.")]
    InvalidNumber,

    #[error("Please enter a valid number greater than 0.")]
    NotPositive,
}

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown unit category: {name}")]
    UnknownCategory { name: String },

    #[error("Unit '{unit}' is not part of the {category} category")]
    UnitNotInCategory { category: String, unit: String },

    #[error("{0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{code} {message}")]
    GeminiApiError {
        code: u16,
        status: Option<String>,
        message: String,
    },

    #[error("Malformed model response: {message}")]
    MalformedResponse { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing credential: {key} was not found in the environment or the secrets file")]
    MissingCredential { key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 單次請求失敗，可直接重試
    Medium,
    /// 輸入錯誤，未送出請求
    High,
    /// 啟動失敗，無法繼續
    Critical,
}

impl ConverterError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConverterError::Validation(_)
            | ConverterError::UnknownCategory { .. }
            | ConverterError::UnitNotInCategory { .. } => ErrorSeverity::High,
            ConverterError::ApiError(_)
            | ConverterError::GeminiApiError { .. }
            | ConverterError::MalformedResponse { .. }
            | ConverterError::SerializationError(_) => ErrorSeverity::Medium,
            ConverterError::IoError(_)
            | ConverterError::TomlError(_)
            | ConverterError::ConfigError { .. }
            | ConverterError::InvalidConfigValueError { .. }
            | ConverterError::MissingCredential { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConverterError::Validation(_) => {
                "Enter a plain number such as 10 or 2.5".to_string()
            }
            ConverterError::UnknownCategory { .. } | ConverterError::UnitNotInCategory { .. } => {
                "Run with --list-units to see the available categories and units".to_string()
            }
            ConverterError::ApiError(_) => {
                "Check your network connection and try again".to_string()
            }
            ConverterError::GeminiApiError { code, .. } => match code {
                400 | 401 | 403 => "Check that GEMINI_API_KEY is valid".to_string(),
                429 => "Quota exceeded, wait a moment before trying again".to_string(),
                _ => "The Gemini service reported an error, try again later".to_string(),
            },
            ConverterError::MalformedResponse { .. } | ConverterError::SerializationError(_) => {
                "The model returned no usable text, try rephrasing the units".to_string()
            }
            ConverterError::MissingCredential { key } => format!(
                "Set {} in the environment, a .env file, or the secrets file",
                key
            ),
            ConverterError::IoError(_)
            | ConverterError::TomlError(_)
            | ConverterError::ConfigError { .. }
            | ConverterError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line arguments".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConverterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::InvalidNumber.to_string(),
            "Please enter a valid number."
        );
        assert_eq!(
            ConverterError::from(ValidationError::NotPositive).to_string(),
            "Please enter a valid number greater than 0."
        );
    }

    #[test]
    fn test_gemini_error_display_and_severity() {
        let err = ConverterError::GeminiApiError {
            code: 400,
            status: Some("INVALID_ARGUMENT".to_string()),
            message: "API key not valid. Please pass a valid API key.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "400 API key not valid. Please pass a valid API key."
        );
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_exit_codes_by_severity() {
        let missing = ConverterError::MissingCredential {
            key: "GEMINI_API_KEY".to_string(),
        };
        assert_eq!(missing.severity(), ErrorSeverity::Critical);
        assert_eq!(missing.exit_code(), 3);

        let selection = ConverterError::UnknownCategory {
            name: "Colour".to_string(),
        };
        assert_eq!(selection.exit_code(), 2);
        assert_eq!(selection.severity(), ErrorSeverity::High);
    }
}

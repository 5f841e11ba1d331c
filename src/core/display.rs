use crate::domain::model::ConversionResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{ConverterError, Result};

/// 顯示層如何判斷成功或失敗
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// 依結果的變體分支
    #[default]
    Tagged,
    /// 舊版：文字中出現 "Error"（區分大小寫）即視為失敗
    Legacy,
}

impl FromStr for DisplayMode {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tagged" => Ok(DisplayMode::Tagged),
            "legacy" => Ok(DisplayMode::Legacy),
            other => Err(ConverterError::InvalidConfigValueError {
                field: "display.mode".to_string(),
                value: other.to_string(),
                reason: "Valid modes: tagged, legacy".to_string(),
            }),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Tagged => f.write_str("tagged"),
            DisplayMode::Legacy => f.write_str("legacy"),
        }
    }
}

/// 最終要顯示的內容：成功區塊或錯誤區塊
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Error(String),
    /// 輸入驗證失敗，請求未送出
    Rejected(String),
}

impl Outcome {
    pub fn present(result: ConversionResult, mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Tagged => match result {
                ConversionResult::Success(text) => Outcome::Success(text),
                ConversionResult::Failure(message) => Outcome::Error(message),
            },
            DisplayMode::Legacy => {
                let text = result.into_text();
                if text.contains("Error") {
                    Outcome::Error(text)
                } else {
                    Outcome::Success(text)
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// 使用者看到的文字
    pub fn message(&self) -> String {
        match self {
            Outcome::Success(text) => format!("Converted value: {}", text),
            Outcome::Error(message) | Outcome::Rejected(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_mode_branches_on_variant() {
        let result = ConversionResult::Success("Error margin is 0.1%, 5 km = 3.1 mi".to_string());
        let outcome = Outcome::present(result, DisplayMode::Tagged);
        assert!(outcome.is_success());
        assert_eq!(
            outcome.message(),
            "Converted value: Error margin is 0.1%, 5 km = 3.1 mi"
        );

        let failure = ConversionResult::Failure("Error: 429 Resource exhausted".to_string());
        assert_eq!(
            Outcome::present(failure, DisplayMode::Tagged),
            Outcome::Error("Error: 429 Resource exhausted".to_string())
        );
    }

    #[test]
    fn test_legacy_mode_misclassifies_error_substring() {
        let result = ConversionResult::Success("Error margin is 0.1%, 5 km = 3.1 mi".to_string());
        assert_eq!(
            Outcome::present(result, DisplayMode::Legacy),
            Outcome::Error("Error margin is 0.1%, 5 km = 3.1 mi".to_string())
        );

        // 只比對大寫開頭的 "Error"
        let result = ConversionResult::Success("no error here: 1 kg = 2.2 lb".to_string());
        assert!(Outcome::present(result, DisplayMode::Legacy).is_success());
    }

    #[test]
    fn test_display_mode_parsing() {
        assert_eq!("legacy".parse::<DisplayMode>().unwrap(), DisplayMode::Legacy);
        assert_eq!("tagged".parse::<DisplayMode>().unwrap(), DisplayMode::Tagged);
        assert!("Legacy".parse::<DisplayMode>().is_err());
        assert_eq!(DisplayMode::default().to_string(), "tagged");
    }
}

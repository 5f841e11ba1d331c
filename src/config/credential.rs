use crate::utils::error::{ConverterError, Result};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::path::{Path, PathBuf};

pub const API_KEY_NAME: &str = "GEMINI_API_KEY";

/// Gemini API 金鑰。啟動時載入一次，之後唯讀。
pub struct Credential {
    api_key: SecretString,
}

impl Credential {
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key: String = api_key.into();
        Self {
            api_key: SecretString::from(api_key),
        }
    }

    pub fn expose(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// 先查環境變數（含 .env），再查 secrets 檔
#[derive(Debug, Clone)]
pub struct CredentialLoader {
    secrets_path: PathBuf,
    load_dotenv: bool,
}

impl CredentialLoader {
    pub fn new(secrets_path: impl Into<PathBuf>) -> Self {
        Self {
            secrets_path: secrets_path.into(),
            load_dotenv: true,
        }
    }

    pub fn without_dotenv(mut self) -> Self {
        self.load_dotenv = false;
        self
    }

    pub fn load(&self) -> Result<Credential> {
        if self.load_dotenv {
            match dotenv::dotenv() {
                Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
                Err(_) => tracing::debug!("No .env file found"),
            }
        }

        self.resolve(std::env::var(API_KEY_NAME).ok())
    }

    pub fn resolve(&self, env_value: Option<String>) -> Result<Credential> {
        if let Some(key) = env_value.filter(|v| !v.trim().is_empty()) {
            tracing::debug!("Using {} from environment", API_KEY_NAME);
            return Ok(Credential::new(key));
        }

        if let Some(key) = read_secrets_file(&self.secrets_path)? {
            tracing::debug!(
                "Using {} from {}",
                API_KEY_NAME,
                self.secrets_path.display()
            );
            return Ok(Credential::new(key));
        }

        Err(ConverterError::MissingCredential {
            key: API_KEY_NAME.to_string(),
        })
    }
}

/// secrets 檔格式：頂層 `GEMINI_API_KEY = "..."`。檔案不存在視為沒有設定。
fn read_secrets_file(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let table: toml::Table = toml::from_str(&content)?;

    Ok(table
        .get(API_KEY_NAME)
        .and_then(|v| v.as_str())
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string))
}

use crate::config::credential::Credential;
use crate::config::settings::GeminiSettings;
use crate::domain::ports::GenerativeModel;
use crate::utils::error::{ConverterError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptFeedback {
    #[serde(rename = "blockReason")]
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    code: Option<u16>,
    message: Option<String>,
    status: Option<String>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// 第一個候選回覆的所有文字片段串接
    pub fn text(&self) -> Result<String> {
        let candidate = self.candidates.first().ok_or_else(|| {
            let reason = self
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.clone());
            ConverterError::MalformedResponse {
                message: match reason {
                    Some(reason) => format!("no candidates returned, prompt blocked ({})", reason),
                    None => "no candidates returned".to_string(),
                },
            }
        })?;

        let text: String = candidate
            .content
            .iter()
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.is_empty() {
            return Err(ConverterError::MalformedResponse {
                message: format!(
                    "candidate contained no text (finish reason: {})",
                    candidate.finish_reason.as_deref().unwrap_or("unknown")
                ),
            });
        }

        Ok(text)
    }
}

/// Gemini REST `generateContent` 用戶端。未設定逾時，沿用 reqwest 預設。
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    credential: Credential,
}

impl GeminiClient {
    pub fn new(settings: &GeminiSettings, credential: Credential) -> Self {
        Self {
            client: Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            credential,
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate_content(&self, prompt: &str) -> Result<String> {
        let url = self.endpoint();
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.credential.expose())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => ConverterError::GeminiApiError {
                    code: envelope.error.code.unwrap_or(status.as_u16()),
                    status: envelope.error.status,
                    message: envelope.error.message.unwrap_or_else(|| body.clone()),
                },
                Err(_) => ConverterError::GeminiApiError {
                    code: status.as_u16(),
                    status: None,
                    message: if body.trim().is_empty() {
                        status.canonical_reason().unwrap_or("Unknown error").to_string()
                    } else {
                        body
                    },
                },
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        parsed.text()
    }
}

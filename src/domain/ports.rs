use crate::utils::error::Result;
use async_trait::async_trait;

/// 生成式文字服務：一段提示進，一段文字出
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    fn model_name(&self) -> &str;

    async fn generate_content(&self, prompt: &str) -> Result<String>;
}

use crate::domain::model::{ConversionRequest, ConversionResult};
use crate::domain::ports::GenerativeModel;

/// 把驗證過的請求轉成一句指令並呼叫模型。
/// 不重試、不串流，外部錯誤不會往外拋。
pub struct ConversionRequester<M: GenerativeModel> {
    model: M,
}

impl<M: GenerativeModel> ConversionRequester<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub async fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        let prompt = request.prompt();
        tracing::debug!(
            "Sending {} prompt to {}: {}",
            request.category(),
            self.model.model_name(),
            prompt
        );

        match self.model.generate_content(&prompt).await {
            Ok(text) => {
                tracing::debug!("Model responded with {} bytes", text.len());
                ConversionResult::Success(text)
            }
            Err(e) => {
                // 錯誤只顯示給使用者一次，日誌只留 debug
                tracing::debug!("Conversion request failed: {}", e);
                ConversionResult::from_error(&e)
            }
        }
    }
}

use crate::core::display::{DisplayMode, Outcome};
use crate::core::input::{FormInput, InputHandler};
use crate::core::requester::ConversionRequester;
use crate::domain::ports::GenerativeModel;
use crate::utils::error::{ConverterError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Requesting,
}

/// 可跨執行緒共用的狀態旗標，呼叫進行中可由外部讀取
#[derive(Debug, Clone, Default)]
pub struct EngineStateHandle(Arc<AtomicBool>);

impl EngineStateHandle {
    pub fn state(&self) -> EngineState {
        if self.0.load(Ordering::SeqCst) {
            EngineState::Requesting
        } else {
            EngineState::Idle
        }
    }

    fn set(&self, requesting: bool) {
        self.0.store(requesting, Ordering::SeqCst);
    }
}

/// 一次提交：輸入驗證 → 呼叫模型 → 顯示結果
pub struct ConverterEngine<M: GenerativeModel> {
    requester: ConversionRequester<M>,
    display_mode: DisplayMode,
    state: EngineStateHandle,
}

impl<M: GenerativeModel> ConverterEngine<M> {
    pub fn new(model: M) -> Self {
        Self::with_display_mode(model, DisplayMode::default())
    }

    pub fn with_display_mode(model: M, display_mode: DisplayMode) -> Self {
        Self {
            requester: ConversionRequester::new(model),
            display_mode,
            state: EngineStateHandle::default(),
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn state(&self) -> EngineState {
        self.state.state()
    }

    pub fn state_handle(&self) -> EngineStateHandle {
        self.state.clone()
    }

    /// 驗證失敗回傳 `Outcome::Rejected`，不會送出請求；
    /// 選單錯誤（分類或單位不存在）以 `Err` 回傳。
    pub async fn submit(&self, input: &FormInput) -> Result<Outcome> {
        let request = match InputHandler::handle(input) {
            Ok(request) => request,
            Err(ConverterError::Validation(e)) => {
                tracing::debug!("Input rejected: {}", e);
                return Ok(Outcome::Rejected(e.to_string()));
            }
            Err(e) => return Err(e),
        };

        self.state.set(true);
        let result = self.requester.convert(&request).await;
        self.state.set(false);

        Ok(Outcome::present(result, self.display_mode))
    }
}

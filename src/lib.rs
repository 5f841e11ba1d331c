pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::GeminiClient;
pub use crate::config::{Credential, CredentialLoader, Settings};
pub use crate::core::{
    display::{DisplayMode, Outcome},
    engine::{ConverterEngine, EngineState, EngineStateHandle},
    input::{FormInput, InputHandler},
    requester::ConversionRequester,
};
pub use crate::domain::model::{ConversionRequest, ConversionResult, DecimalInteger, NumericValue};
pub use crate::domain::units::UnitCategory;
pub use crate::utils::error::{ConverterError, Result, ValidationError};

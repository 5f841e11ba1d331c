pub mod display;
pub mod engine;
pub mod input;
pub mod requester;

pub use crate::domain::model::{ConversionRequest, ConversionResult, DecimalInteger, NumericValue};
pub use crate::domain::ports::GenerativeModel;
pub use crate::domain::units::UnitCategory;
pub use crate::utils::error::Result;

use crate::domain::units::UnitCategory;
use crate::utils::error::{ConverterError, Result, ValidationError};
use std::fmt;
use std::str::FromStr;

/// 任意位數的十進位整數，以正規化後的數字字串保存（無前導零，零不帶負號）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalInteger {
    negative: bool,
    digits: String,
}

impl DecimalInteger {
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }
}

impl FromStr for DecimalInteger {
    type Err = ValidationError;

    /// 可選的正負號加上 ASCII 數字
    fn from_str(s: &str) -> std::result::Result<Self, ValidationError> {
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidNumber);
        }

        let trimmed = body.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };

        Ok(Self {
            negative: negative && digits != "0",
            digits: digits.to_string(),
        })
    }
}

impl From<i64> for DecimalInteger {
    fn from(n: i64) -> Self {
        Self {
            negative: n < 0,
            digits: n.unsigned_abs().to_string(),
        }
    }
}

impl fmt::Display for DecimalInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

/// 解析後的數值，保留「整數 / 浮點」的區別，提示字串的呈現方式不同
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    Integer(DecimalInteger),
    Float(f64),
}

impl NumericValue {
    pub fn is_positive(&self) -> bool {
        match self {
            NumericValue::Integer(n) => n.is_positive(),
            // NaN 比較一律為 false
            NumericValue::Float(x) => *x > 0.0,
        }
    }
}

impl From<i64> for NumericValue {
    fn from(n: i64) -> Self {
        NumericValue::Integer(n.into())
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Integer(n) => write!(f, "{}", n),
            NumericValue::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// 最短可還原的十進位表示，永遠帶小數部分；
/// 十進位指數 < -4 或 >= 16 時改用科學記號（指數帶正負號、至少兩位）。
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{:e}", x);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let plain = x.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

/// 一次送出的轉換請求。單位必定屬於該分類，數值必定大於 0。
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    category: UnitCategory,
    from_unit: &'static str,
    to_unit: &'static str,
    value: NumericValue,
}

impl ConversionRequest {
    pub fn new(
        category: UnitCategory,
        from_unit: &str,
        to_unit: &str,
        value: NumericValue,
    ) -> Result<Self> {
        let from_unit = category.unit(from_unit)?;
        let to_unit = category.unit(to_unit)?;
        if !value.is_positive() {
            return Err(ValidationError::NotPositive.into());
        }

        Ok(Self {
            category,
            from_unit,
            to_unit,
            value,
        })
    }

    pub fn category(&self) -> UnitCategory {
        self.category
    }

    /// 送給模型的指令，不含分類名稱
    pub fn prompt(&self) -> String {
        format!("Convert {} {} to {}.", self.value, self.from_unit, self.to_unit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    Success(String),
    Failure(String),
}

impl ConversionResult {
    /// 外部呼叫失敗一律轉成 "Error: {details}"
    pub fn from_error(err: &ConverterError) -> Self {
        ConversionResult::Failure(format!("Error: {}", err))
    }

    /// 舊版行為：成功與失敗都只是一段字串
    pub fn into_text(self) -> String {
        match self {
            ConversionResult::Success(text) | ConversionResult::Failure(text) => text,
        }
    }
}

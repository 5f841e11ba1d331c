use crate::domain::model::{ConversionRequest, DecimalInteger, NumericValue};
use crate::domain::units::UnitCategory;
use crate::utils::error::{Result, ValidationError};

/// 表單輸入：分類、兩個單位、原始數值字串
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub value_input: String,
}

pub struct InputHandler;

impl InputHandler {
    /// 含 '.' 視為浮點數，否則視為整數（不限位數）。
    /// 這是文字判斷而非數值格式驗證，所以 "1e5" 會以整數解析並失敗。
    pub fn parse_value(value_input: &str) -> std::result::Result<NumericValue, ValidationError> {
        let folded = fold_decimal_digits(value_input.trim());
        let digits = strip_digit_separators(&folded).ok_or(ValidationError::InvalidNumber)?;

        if value_input.contains('.') {
            digits
                .parse::<f64>()
                .map(NumericValue::Float)
                .map_err(|_| ValidationError::InvalidNumber)
        } else {
            digits.parse::<DecimalInteger>().map(NumericValue::Integer)
        }
    }

    pub fn parse_positive(value_input: &str) -> std::result::Result<NumericValue, ValidationError> {
        let value = Self::parse_value(value_input)?;
        if !value.is_positive() {
            return Err(ValidationError::NotPositive);
        }
        Ok(value)
    }

    /// 先確認選單，再解析數值，最後檢查大於 0
    pub fn handle(input: &FormInput) -> Result<ConversionRequest> {
        let category: UnitCategory = input.category.parse()?;
        let from_unit = category.unit(&input.from_unit)?;
        let to_unit = category.unit(&input.to_unit)?;
        let value = Self::parse_positive(&input.value_input)?;

        tracing::debug!(
            "Validated input: {} {} -> {} ({})",
            value,
            from_unit,
            to_unit,
            category
        );

        ConversionRequest::new(category, from_unit, to_unit, value)
    }
}

/// 底線只能夾在兩個數字之間（"1_000" 可以，"_1"、"1__0"、"1_" 不行）
fn strip_digit_separators(s: &str) -> Option<String> {
    if !s.contains('_') {
        return Some(s.to_string());
    }

    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, c) in chars.iter().enumerate() {
        if *c == '_' {
            let prev_is_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let next_is_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            if !(prev_is_digit && next_is_digit) {
                return None;
            }
        } else {
            out.push(*c);
        }
    }
    Some(out)
}

/// Unicode 十進位數字區塊（Nd）的 '0' 碼位，每個區塊連續十個數字
const DECIMAL_ZEROS: &[u32] = &[
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
    0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0,
    0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450,
    0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x16A60, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2,
    0x1D7EC, 0x1D7F6, 0x1E950, 0x1FBF0,
];

/// 把全形、阿拉伯-印度等十進位數字轉成 ASCII 數字，其他字元不變
fn fold_decimal_digits(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                return c;
            }
            let code = c as u32;
            DECIMAL_ZEROS
                .iter()
                .find(|zero| (**zero..**zero + 10).contains(&code))
                .and_then(|zero| char::from_digit(code - zero, 10))
                .unwrap_or(c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ConverterError;

    fn form(value_input: &str) -> FormInput {
        FormInput {
            category: "Length".to_string(),
            from_unit: "meters".to_string(),
            to_unit: "feet".to_string(),
            value_input: value_input.to_string(),
        }
    }

    #[test]
    fn test_parse_integer_without_dot() {
        assert_eq!(InputHandler::parse_value("10"), Ok(NumericValue::from(10)));
        assert_eq!(InputHandler::parse_value("007"), Ok(NumericValue::from(7)));
        assert_eq!(InputHandler::parse_value("+5"), Ok(NumericValue::from(5)));
        assert_eq!(InputHandler::parse_value(" 42 "), Ok(NumericValue::from(42)));
        assert_eq!(InputHandler::parse_value("1_000"), Ok(NumericValue::from(1000)));
        assert_eq!(InputHandler::parse_value("-5"), Ok(NumericValue::from(-5)));
    }

    #[test]
    fn test_parse_float_with_dot() {
        assert_eq!(InputHandler::parse_value("2.5"), Ok(NumericValue::Float(2.5)));
        assert_eq!(InputHandler::parse_value("10."), Ok(NumericValue::Float(10.0)));
        assert_eq!(InputHandler::parse_value(".5"), Ok(NumericValue::Float(0.5)));
        assert_eq!(InputHandler::parse_value("1.5e3"), Ok(NumericValue::Float(1500.0)));
    }

    #[test]
    fn test_unparsable_inputs() {
        for raw in ["abc", "1e5", "1.2.3", "", ".", "1__0", "_1", "1_", "12abc", "inf"] {
            assert_eq!(
                InputHandler::parse_value(raw),
                Err(ValidationError::InvalidNumber),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_integers_beyond_machine_width_are_accepted() {
        let value = InputHandler::parse_value("99999999999999999999").unwrap();
        assert_eq!(value.to_string(), "99999999999999999999");
        assert!(value.is_positive());

        let request = InputHandler::handle(&FormInput {
            category: "Data Storage".to_string(),
            from_unit: "bytes".to_string(),
            to_unit: "petabytes".to_string(),
            value_input: "99999999999999999999".to_string(),
        })
        .unwrap();
        assert_eq!(
            request.prompt(),
            "Convert 99999999999999999999 bytes to petabytes."
        );

        assert_eq!(
            InputHandler::parse_positive("-99999999999999999999"),
            Err(ValidationError::NotPositive)
        );
    }

    #[test]
    fn test_unicode_decimal_digits() {
        assert_eq!(InputHandler::parse_value("１０"), Ok(NumericValue::from(10)));
        assert_eq!(InputHandler::parse_value("٤٢"), Ok(NumericValue::from(42)));
        assert_eq!(InputHandler::parse_value("२.५"), Ok(NumericValue::Float(2.5)));
        assert_eq!(InputHandler::parse_value("１_０００"), Ok(NumericValue::from(1000)));
        // 全形小數點不是 '.'，仍走整數解析
        assert_eq!(
            InputHandler::parse_value("１．５"),
            Err(ValidationError::InvalidNumber)
        );
        assert_eq!(InputHandler::parse_value("½"), Err(ValidationError::InvalidNumber));
    }

    #[test]
    fn test_non_positive_values() {
        for raw in ["0", "-5", "0.0", "-0.5", "-0"] {
            assert_eq!(
                InputHandler::parse_positive(raw),
                Err(ValidationError::NotPositive),
                "input {:?}",
                raw
            );
        }
        assert!(InputHandler::parse_positive("0.001").is_ok());
    }

    #[test]
    fn test_handle_builds_request() {
        let request = InputHandler::handle(&form("10")).unwrap();
        assert_eq!(request.prompt(), "Convert 10 meters to feet.");
        assert_eq!(
            request,
            ConversionRequest::new(UnitCategory::Length, "meters", "feet", NumericValue::from(10))
                .unwrap()
        );
    }

    #[test]
    fn test_handle_reports_validation_text() {
        let err = InputHandler::handle(&form("abc")).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid number.");

        let err = InputHandler::handle(&form("-5")).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid number greater than 0.");
    }

    #[test]
    fn test_handle_rejects_unit_outside_category() {
        let mut input = form("10");
        input.to_unit = "Kelvin".to_string();
        assert!(matches!(
            InputHandler::handle(&input),
            Err(ConverterError::UnitNotInCategory { .. })
        ));
    }
}

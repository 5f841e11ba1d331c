use crate::utils::error::{ConverterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitCategory {
    #[default]
    Length,
    Weight,
    Temperature,
    Volume,
    Time,
    Speed,
    Energy,
    Pressure,
    #[serde(rename = "Data Storage")]
    DataStorage,
}

impl UnitCategory {
    /// 依下拉選單的顯示順序
    pub const ALL: [UnitCategory; 9] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
        UnitCategory::Volume,
        UnitCategory::Time,
        UnitCategory::Speed,
        UnitCategory::Energy,
        UnitCategory::Pressure,
        UnitCategory::DataStorage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Volume => "Volume",
            UnitCategory::Time => "Time",
            UnitCategory::Speed => "Speed",
            UnitCategory::Energy => "Energy",
            UnitCategory::Pressure => "Pressure",
            UnitCategory::DataStorage => "Data Storage",
        }
    }

    pub fn units(&self) -> &'static [&'static str] {
        match self {
            UnitCategory::Length => &[
                "meters",
                "kilometers",
                "miles",
                "feet",
                "inches",
                "centimeters",
                "millimeters",
                "yards",
            ],
            UnitCategory::Weight => &["kilograms", "grams", "pounds", "ounces", "tons"],
            UnitCategory::Temperature => &["Celsius", "Fahrenheit", "Kelvin"],
            UnitCategory::Volume => &["liters", "milliliters", "gallons", "cups"],
            UnitCategory::Time => &[
                "seconds", "minutes", "hours", "days", "weeks", "months", "years",
            ],
            UnitCategory::Speed => &[
                "meters per second",
                "kilometers per hour",
                "miles per hour",
                "knots",
            ],
            UnitCategory::Energy => &["joules", "calories", "kilowatt-hours", "electronvolts"],
            UnitCategory::Pressure => &["pascals", "bars", "atmospheres", "psi"],
            UnitCategory::DataStorage => &[
                "bytes",
                "kilobytes",
                "megabytes",
                "gigabytes",
                "terabytes",
                "petabytes",
            ],
        }
    }

    /// 選單預設值：第一個單位
    pub fn default_unit(&self) -> &'static str {
        self.units()[0]
    }

    /// 只接受清單中的單位名稱（大小寫需一致）
    pub fn unit(&self, name: &str) -> Result<&'static str> {
        self.units()
            .iter()
            .copied()
            .find(|unit| *unit == name)
            .ok_or_else(|| ConverterError::UnitNotInCategory {
                category: self.name().to_string(),
                unit: name.to_string(),
            })
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnitCategory {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self> {
        UnitCategory::ALL
            .iter()
            .copied()
            .find(|category| category.name() == s)
            .ok_or_else(|| ConverterError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

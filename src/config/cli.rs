use crate::config::settings::Settings;
use crate::core::input::FormInput;
use crate::domain::units::UnitCategory;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "unit-convert")]
#[command(about = "Convert a value between units by asking a Gemini model")]
pub struct CliConfig {
    #[arg(long, default_value = "Length", help = "Unit category, e.g. \"Data Storage\"")]
    pub category: String,

    #[arg(long = "from", help = "Source unit (defaults to the category's first unit)")]
    pub from_unit: Option<String>,

    #[arg(long = "to", help = "Target unit (defaults to the category's first unit)")]
    pub to_unit: Option<String>,

    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub value: String,

    #[arg(long, help = "How results are classified: tagged or legacy")]
    pub display_mode: Option<String>,

    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Path to the secrets file holding GEMINI_API_KEY")]
    pub secrets: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long, help = "Print the unit catalog and exit")]
    pub list_units: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 設定檔為底，命令列參數覆蓋
    pub fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                Settings::from_file(path)?
            }
            None => Settings::default(),
        };

        if let Some(model) = &self.model {
            settings.gemini.model = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            settings.gemini.base_url = base_url.clone();
        }
        if let Some(secrets) = &self.secrets {
            settings.secrets.path = secrets.clone();
        }
        if let Some(mode) = &self.display_mode {
            settings.display.mode = mode.parse()?;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// 沒指定單位時用分類的第一個單位，與下拉選單的預設一致
    pub fn form_input(&self) -> FormInput {
        let default_unit = self
            .category
            .parse::<UnitCategory>()
            .map(|category| category.default_unit().to_string())
            .unwrap_or_default();

        FormInput {
            category: self.category.clone(),
            from_unit: self.from_unit.clone().unwrap_or_else(|| default_unit.clone()),
            to_unit: self.to_unit.clone().unwrap_or(default_unit),
            value_input: self.value.clone(),
        }
    }
}

/// `--list-units` 的輸出
pub fn render_catalog() -> String {
    UnitCategory::ALL
        .iter()
        .map(|category| format!("{}: {}", category, category.units().join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

use anyhow::Result;
use clap::Parser;
use gemini_unit_converter::utils::validation::Validate;
use gemini_unit_converter::{CliConfig, ConverterError, CredentialLoader, DisplayMode, Settings};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_settings_file_points_at_secrets_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let secrets_path = temp_dir.path().join("secrets.toml");
    fs::write(&secrets_path, "GEMINI_API_KEY = \"hosted-secret\"\n")?;

    let settings_path = temp_dir.path().join("unit-convert.toml");
    fs::write(
        &settings_path,
        format!(
            "[secrets]\npath = \"{}\"\n\n[display]\nmode = \"legacy\"\n",
            secrets_path.display()
        ),
    )?;

    let config = CliConfig::parse_from([
        "unit-convert",
        "--config",
        settings_path.to_str().unwrap(),
    ]);
    let settings = config.resolve_settings()?;
    assert_eq!(settings.display.mode, DisplayMode::Legacy);

    let credential = CredentialLoader::new(settings.secrets.path.clone())
        .without_dotenv()
        .resolve(None)?;
    assert_eq!(credential.expose(), "hosted-secret");

    Ok(())
}

#[test]
fn test_missing_credential_stops_startup() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = Settings::default();
    settings.validate()?;

    let err = CredentialLoader::new(temp_dir.path().join(&settings.secrets.path))
        .without_dotenv()
        .resolve(None)
        .unwrap_err();

    assert!(matches!(err, ConverterError::MissingCredential { .. }));
    assert_eq!(
        err.to_string(),
        "Missing credential: GEMINI_API_KEY was not found in the environment or the secrets file"
    );
    Ok(())
}

#[test]
fn test_bad_base_url_is_rejected_before_startup() {
    let config = CliConfig::parse_from(["unit-convert", "--base-url", "ftp://example.com"]);
    let err = config.resolve_settings().unwrap_err();
    assert!(matches!(err, ConverterError::InvalidConfigValueError { .. }));
    assert_eq!(err.exit_code(), 3);
}

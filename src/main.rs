use clap::Parser;
use gemini_unit_converter::config::cli::render_catalog;
use gemini_unit_converter::utils::logger;
use gemini_unit_converter::{
    CliConfig, ConverterEngine, ConverterError, CredentialLoader, GeminiClient, Outcome,
};

fn exit_with(e: &ConverterError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e);
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.list_units {
        println!("{}", render_catalog());
        return Ok(());
    }

    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    // 金鑰在啟動時載入一次，缺少就無法繼續
    let credential = match CredentialLoader::new(settings.secrets.path.clone()).load() {
        Ok(credential) => credential,
        Err(e) => exit_with(&e),
    };

    tracing::info!(
        "Using model {} ({} display)",
        settings.gemini.model,
        settings.display.mode
    );

    let client = GeminiClient::new(&settings.gemini, credential);
    let engine = ConverterEngine::with_display_mode(client, settings.display.mode);

    match engine.submit(&config.form_input()).await {
        Ok(outcome @ Outcome::Success(_)) => {
            println!("{}", outcome.message());
        }
        Ok(outcome @ Outcome::Error(_)) => {
            eprintln!("{}", outcome.message());
            std::process::exit(1);
        }
        Ok(outcome @ Outcome::Rejected(_)) => {
            eprintln!("{}", outcome.message());
            std::process::exit(2);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

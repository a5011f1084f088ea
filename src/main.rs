use anyhow::Context;
use clap::Parser;
use consulton_tiers::app;
use consulton_tiers::utils::{logger, validation::Validate};
use consulton_tiers::{CliConfig, TierError};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = try_main(&config) {
        // 記錄完整錯誤鏈
        tracing::error!("❌ tier-resolve failed: {:#}", e);

        match e.downcast_ref::<TierError>() {
            Some(tier_error) => {
                tracing::error!(
                    "Category: {:?}, Severity: {:?}",
                    tier_error.category(),
                    tier_error.severity()
                );
                eprintln!("❌ {}: {}", e, tier_error.user_friendly_message());
                eprintln!("💡 Suggestion: {}", tier_error.recovery_suggestion());
                std::process::exit(tier_error.exit_code());
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn try_main(config: &CliConfig) -> anyhow::Result<()> {
    config.validate().context("Invalid arguments")?;

    let table = config.tier_table().with_context(|| match &config.tiers {
        Some(path) => format!("Failed to load tier table from '{}'", path),
        None => "Failed to load built-in tier table".to_string(),
    })?;

    let output = app::execute(config, &table)
        .with_context(|| format!("Failed to run {:?}", config.command))?;
    let text = app::render(&output, config.json).context("Failed to render output")?;
    println!("{}", text);

    Ok(())
}

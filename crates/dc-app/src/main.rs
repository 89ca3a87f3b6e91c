use anyhow::Result;
use clap::Parser;
use dc_core::ConverterConfig;
use dc_encode::DotEncoder;

pub mod cli;
pub mod commands;
pub mod watch;

use cli::{Cli, Command};

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config, puis appliquer les overrides CLI
    let mut config = resolve_config(&cli)?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    match &cli.command {
        Command::Convert {
            input,
            output,
            watch,
        } => commands::run_convert(input, output.as_deref(), *watch, &config),
        Command::Encode { dots } => {
            let line = commands::encode_line(&DotEncoder::new(config.encoder), dots)?;
            println!("{line}");
            Ok(())
        }
        Command::Decode { cell } => {
            let text = commands::decode_line(cell, config.encoder.separator)?;
            println!("{text}");
            Ok(())
        }
    }
}

/// Resolve config: --config if present, defaults otherwise.
fn resolve_config(cli: &Cli) -> Result<ConverterConfig> {
    if cli.config.exists() {
        dc_core::config::load_config(&cli.config)
    } else {
        log::info!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(ConverterConfig::default())
    }
}

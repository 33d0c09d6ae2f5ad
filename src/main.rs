use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use currency_converter::catalog::Currency;
use currency_converter::config::{Config, ServiceMode};
use currency_converter::converter::amount::{parse_amount, validate_payload};
use currency_converter::converter::Orchestrator;
use currency_converter::logging::{init_tracing, LogTarget};
use currency_converter::shutdown::ShutdownHandle;
use currency_converter::{build_client, ui};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "currency-converter", version, about = "Convert between currencies")]
struct Cli {
    /// Config file (default: ~/.config/currency-converter/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use the built-in rate table instead of the conversion service
    #[arg(long)]
    offline: bool,

    /// Override the initial source currency
    #[arg(long, value_name = "CODE")]
    from: Option<Currency>,

    /// Override the initial target currency
    #[arg(long, value_name = "CODE")]
    to: Option<Currency>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert once and print the result
    Convert {
        amount: String,
        from: Currency,
        to: Currency,
    },
    /// List supported currencies
    Currencies,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;

    if cli.offline {
        config.service.mode = ServiceMode::Offline;
    }
    if let Some(from) = cli.from {
        config.converter.source = from;
    }
    if let Some(to) = cli.to {
        config.converter.target = to;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(Command::Currencies) = cli.command {
        for currency in Currency::ALL {
            println!("{}  {}", currency.code(), currency.name());
        }
        return Ok(());
    }

    let config = load_config(&cli)?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    match cli.command {
        Some(Command::Convert { amount, from, to }) => {
            init_tracing(&config.logging, LogTarget::Stderr)?;
            runtime.block_on(convert_once(&config, &amount, from, to))
        }
        _ => {
            let log_path = config.logging.file_path();
            init_tracing(&config.logging, LogTarget::File(&log_path))
                .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
            runtime.block_on(interactive(config))
        }
    }
}

async fn convert_once(config: &Config, text: &str, from: Currency, to: Currency) -> anyhow::Result<()> {
    let amount = parse_amount(text);
    if amount <= Decimal::ZERO {
        bail!("Amount must be a positive number, got '{text}'");
    }

    let client = build_client(&config.service)?;
    let payload = client.convert(from, amount, to).await?;
    let formatted = validate_payload(&payload, from, to)?;
    println!("{} {} = {} {}", amount.normalize(), from, formatted, to);
    Ok(())
}

async fn interactive(config: Config) -> anyhow::Result<()> {
    let shutdown = ShutdownHandle::new();
    let client = build_client(&config.service)?;
    let (converter, task) = Orchestrator::spawn(client, &config.converter, shutdown.clone());

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_shutdown.signal();
        }
    });

    let result = ui::run(converter, shutdown.clone()).await;
    shutdown.signal();
    let _ = task.await;
    result.context("Terminal UI failed")
}

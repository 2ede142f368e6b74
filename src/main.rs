use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use xchg::cli::ui;
use xchg::core::config::AppConfig;
use xchg::core::log::init_logging;

/// Convert between GBP and EUR using a rate cached once per day.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Currency the value is given in: p (pounds) or e (euros)
    #[arg(short, long, value_enum, default_value_t = CurrencyArg::P)]
    currency: CurrencyArg,

    /// Value to convert
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    value: f64,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,

    /// Directory holding api.key and exchange.json
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CurrencyArg {
    /// Pounds to euros
    P,
    /// Euros to pounds
    E,
}

impl From<CurrencyArg> for xchg::core::Direction {
    fn from(arg: CurrencyArg) -> xchg::core::Direction {
        match arg {
            CurrencyArg::P => xchg::core::Direction::PoundsToEuros,
            CurrencyArg::E => xchg::core::Direction::EurosToPounds,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = convert(&cli).await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Conversion failed");
    }
    result
}

async fn convert(cli: &Cli) -> Result<()> {
    let config = match &cli.config_dir {
        Some(dir) => AppConfig::in_dir(dir),
        None => AppConfig::load()?,
    };

    let spinner = ui::new_spinner("Checking exchange rate...");
    let result = xchg::run(&config, cli.currency.into(), cli.value).await;
    spinner.finish_and_clear();

    println!("{}", result?.display_line());
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use log::{ debug, info };

use cadastre::implementations;
use cadastre::models;
use cadastre::traits;

use cadastre::config::RegistryOptions;
use cadastre::implementations::config::OracleConfig;
use cadastre::implementations::contract::ContractRouter;
use cadastre::implementations::file_ledger::FileLedger;
use cadastre::implementations::rate_oracle::{ AlphaVantageClient, FixedRateSource };
use cadastre::implementations::registry::PropertyRegistry;
use cadastre::traits::rate_source::RateSource;

mod cli;
use cli::{ CadastreCli, Commands };

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = CadastreCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if dotenv().is_ok() {
        debug!("Loaded environment from .env");
    }

    if let Err(e) = run(&cli).await {
        cli::ui::print_error(format!("{:#}", e).as_str());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: &CadastreCli) -> Result<()> {
    // Resolve oracle settings
    let oracle_config = match &cli.oracle_config {
        Some(path) => OracleConfig::from_file(path)?,
        None => OracleConfig::default(),
    };

    // Live oracle by default, fixed rate when requested
    let rates: Box<dyn RateSource> = match cli.fixed_rate {
        Some(rate) => {
            cli::ui::print_warning(
                "Using a fixed exchange rate; the oracle will not be contacted"
            );
            Box::new(FixedRateSource::new(rate))
        }
        None => Box::new(AlphaVantageClient::new(oracle_config)),
    };

    // Open the ledger snapshot and assemble the registry
    let ledger = FileLedger::open(&cli.ledger)?;
    let options = if cli.guarded {
        RegistryOptions::guarded()
    } else {
        RegistryOptions::default()
    };
    let registry = PropertyRegistry::with_options(ledger, rates, options);

    match &cli.command {
        Commands::Add { id, name, area, owner, value } => {
            cli::commands::add::execute(&registry, id, name, *area, owner, *value).await?;
        }

        Commands::List => {
            cli::commands::list::execute(&registry).await?;
        }

        Commands::Get { id } => {
            cli::commands::get::execute(&registry, id).await?;
        }

        Commands::Transfer { id, new_owner } => {
            cli::commands::transfer::execute(&registry, id, new_owner).await?;
        }

        Commands::Invoke { function, args } => {
            let router = ContractRouter::new(registry);
            cli::commands::invoke::execute(&router, function, args).await?;
        }

        Commands::Rate => {
            cli::commands::rate::execute(registry.rate_source()).await?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}

use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "cadastre",
    about = "A property registry kept on a shared, tamper-evident ledger",
    version,
    author,
    long_about = None
)]
pub struct CadastreCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to the ledger snapshot file
    #[arg(long, global = true, default_value = "cadastre-ledger.json")]
    pub ledger: PathBuf,

    /// Path to the oracle configuration file
    #[arg(long, global = true)]
    pub oracle_config: Option<PathBuf>,

    /// Value new properties at this fixed rate instead of asking the oracle
    #[arg(long, global = true)]
    pub fixed_rate: Option<f64>,

    /// Use precondition-checked writes to reject concurrent updates
    #[arg(long, global = true, default_value = "false")]
    pub guarded: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new property on the ledger
    Add {
        /// Identifier to register the property under
        id: String,

        /// Display name of the property
        #[arg(short, long)]
        name: String,

        /// Surface area in square meters
        #[arg(short, long)]
        area: i64,

        /// Name of the first owner
        #[arg(short, long)]
        owner: String,

        /// Market value in US dollars
        #[arg(short, long)]
        value: i64,
    },

    /// List every property on the ledger
    List,

    /// Show a single property
    Get {
        /// Identifier of the property
        id: String,
    },

    /// Transfer a property to a new owner
    Transfer {
        /// Identifier of the property
        id: String,

        /// Name of the new owner
        new_owner: String,
    },

    /// Invoke an entry point by its wire-level function name
    Invoke {
        /// Function name (AddProperty, QueryAllProperties, QueryPropertyByID, TransferProperty)
        function: String,

        /// Positional string arguments for the function
        args: Vec<String>,
    },

    /// Fetch the current exchange rate from the oracle
    Rate,
}

pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::RegistryOptions;
pub use errors::{RegistryError, RegistryResult};
pub use implementations::{
    config::{ConfigError, OracleConfig},
    contract::{ContractError, ContractResponse, ContractRouter},
    file_ledger::FileLedger,
    memory_ledger::MemoryLedger,
    rate_oracle::{AlphaVantageClient, FixedRateSource},
    registry::PropertyRegistry,
};
pub use models::{property::Property, rate::RateQuote};
pub use traits::{
    LedgerError,
    LedgerStore,
    RateError,
    RateSource,
    RegistryContract,
    VersionedValue,
    WritePrecondition,
};

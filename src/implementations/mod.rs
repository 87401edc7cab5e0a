pub mod config;
pub mod contract;
pub mod file_ledger;
pub mod memory_ledger;
pub mod rate_oracle;
pub mod registry;

// Re-export implementations
pub use config::{ConfigError, OracleConfig};
pub use contract::{ContractError, ContractResponse, ContractRouter};
pub use file_ledger::FileLedger;
pub use memory_ledger::MemoryLedger;
pub use rate_oracle::{AlphaVantageClient, FixedRateSource};
pub use registry::PropertyRegistry;

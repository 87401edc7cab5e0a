pub mod ledger_store;
pub mod rate_source;
pub mod contract;

// Re-export traits
pub use ledger_store::{LedgerError, LedgerStore, VersionedValue, WritePrecondition};
pub use rate_source::{RateError, RateSource};
pub use contract::RegistryContract;

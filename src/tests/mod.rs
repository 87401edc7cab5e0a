pub mod contract_tests;
pub mod ledger_tests;

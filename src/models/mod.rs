pub mod property;
pub mod rate;

// Re-export model types
pub use property::Property;
pub use rate::RateQuote;

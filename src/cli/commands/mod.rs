pub mod add;
pub mod get;
pub mod invoke;
pub mod list;
pub mod rate;
pub mod transfer;

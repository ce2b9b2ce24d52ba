pub mod base;
pub mod breaker;
pub mod config;
pub mod store;

pub use self::breaker::*;

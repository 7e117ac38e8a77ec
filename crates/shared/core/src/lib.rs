//! Stockyard Core Domain
//!
//! Pure domain types for the Stockyard trading platform.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Stock, StockId};
pub use error::PriceError;
pub use values::{Exchange, Price, Timestamp};

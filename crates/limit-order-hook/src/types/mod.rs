//! # Core Type Definitions
//!
//! Pool identity, order slots and epoch records.

pub mod epoch;
pub mod pool;

// Re-export all types
pub use epoch::*;
pub use pool::*;

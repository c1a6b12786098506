//! # Limit Order Hook
//!
//! Resting limit orders on top of a concentrated liquidity AMM core.
//!
//! Users deposit one-sided liquidity into a single tick-spacing-wide range
//! just outside the current price. When a trade sweeps the price through
//! that range the deposit converts entirely into the other token, and every
//! depositor can later claim a pro-rata share of the proceeds. Until then a
//! depositor can exit with their share of the unconverted deposit.
//!
//! Bookkeeping lives in the [`EpochLedger`]: each (pool, range, direction)
//! slot maps to its active epoch, and each epoch tracks its depositors'
//! shares and, once filled, the proceeds owed to them. The AMM core is
//! reached through the [`AmmCore`] trait and must call
//! [`LimitOrderHook::after_swap`] after every trade.
//!
//! ## Feature Flags
//!
//! - `client`: serde derives and TOML configuration loading (default)

pub mod amm;
pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod hook;
pub mod ledger;
pub mod math;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use amm::AmmCore;
pub use config::HookConfig;
pub use constants::*;
pub use errors::{HookError, HookResult};
pub use events::HookEvent;
pub use hook::LimitOrderHook;
pub use ledger::EpochLedger;
pub use types::*;
pub use validation::validate_order_range;

//! # Pool Types
//!
//! Identity and price snapshot of a pool as reported by the AMM core.

use std::fmt;

/// Account or currency identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Address(pub [u8; 32]);

impl Address {
    /// Address with every byte set to `byte`, handy for fixtures
    pub const fn repeat_byte(byte: u8) -> Self {
        Self([byte; 32])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..4] {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, "..")
    }
}

/// Identifies a pool. Currencies are sorted so that `currency0 < currency1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolKey {
    pub currency0: Address,
    pub currency1: Address,
    /// Fee in hundredths of a basis point
    pub fee: u32,
    pub tick_spacing: i32,
}

/// Current price of a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot0 {
    /// Current tick
    pub tick: i32,
    /// True when the price sits exactly on `tick`'s boundary price rather
    /// than somewhere inside `[tick, tick + 1)`
    pub price_on_tick: bool,
}

impl Slot0 {
    pub const fn new(tick: i32, price_on_tick: bool) -> Self {
        Self {
            tick,
            price_on_tick,
        }
    }
}

/// A pair of token amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenAmounts {
    pub amount0: u128,
    pub amount1: u128,
}

impl TokenAmounts {
    pub const ZERO: TokenAmounts = TokenAmounts::new(0, 0);

    pub const fn new(amount0: u128, amount1: u128) -> Self {
        Self { amount0, amount1 }
    }

    pub const fn is_zero(&self) -> bool {
        self.amount0 == 0 && self.amount1 == 0
    }
}

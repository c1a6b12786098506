//! # Epoch Types
//!
//! An order slot holds at most one active epoch; an epoch is one generation
//! of deposits at that slot, from its first deposit until it fills or is
//! abandoned.

use std::collections::HashMap;
use std::fmt;

use crate::constants::EPOCH_DEFAULT;
use crate::types::{Address, PoolKey, TokenAmounts};

/// Epoch identifier. `Epoch::DEFAULT` means "no active epoch".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Epoch(pub u64);

impl Epoch {
    pub const DEFAULT: Epoch = Epoch(EPOCH_DEFAULT);

    pub const fn is_default(&self) -> bool {
        self.0 == EPOCH_DEFAULT
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address of a resting order: pool, range lower tick and direction.
///
/// `zero_for_one = true` orders supply token0, rest at or above the current
/// price and fill into token1 as the price rises. `zero_for_one = false`
/// orders supply token1, rest below the price and fill into token0 as the
/// price falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderSlot {
    pub pool: PoolKey,
    pub tick_lower: i32,
    pub zero_for_one: bool,
}

impl OrderSlot {
    pub const fn new(pool: PoolKey, tick_lower: i32, zero_for_one: bool) -> Self {
        Self {
            pool,
            tick_lower,
            zero_for_one,
        }
    }

    pub const fn tick_upper(&self) -> i32 {
        self.tick_lower + self.pool.tick_spacing
    }
}

/// Where an epoch's value currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum EpochStatus {
    /// Deposits still rest in the pool as a single currency
    Resting,
    /// The range was crossed. `proceeds` is what the fill burn returned and
    /// never changes; `unclaimed` shrinks as depositors withdraw.
    Filled {
        proceeds: TokenAmounts,
        unclaimed: TokenAmounts,
    },
}

/// Ledger record of one epoch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpochInfo {
    pub slot: OrderSlot,
    pub currency0: Address,
    pub currency1: Address,
    pub status: EpochStatus,
    /// Sum of all shares until fill; frozen afterwards as the claim denominator
    pub liquidity_total: u128,
    pub(crate) liquidity: HashMap<Address, u128>,
}

impl EpochInfo {
    pub(crate) fn new(slot: OrderSlot) -> Self {
        Self {
            slot,
            currency0: slot.pool.currency0,
            currency1: slot.pool.currency1,
            status: EpochStatus::Resting,
            liquidity_total: 0,
            liquidity: HashMap::new(),
        }
    }

    pub fn is_filled(&self) -> bool {
        matches!(self.status, EpochStatus::Filled { .. })
    }

    /// Liquidity contributed by `owner`, zero once withdrawn
    pub fn liquidity_of(&self, owner: &Address) -> u128 {
        self.liquidity.get(owner).copied().unwrap_or(0)
    }

    /// Sum of all recorded shares
    pub fn shares_total(&self) -> u128 {
        self.liquidity.values().sum()
    }

    /// Token totals still owed to depositors
    pub fn unclaimed(&self) -> TokenAmounts {
        match self.status {
            EpochStatus::Resting => TokenAmounts::ZERO,
            EpochStatus::Filled { unclaimed, .. } => unclaimed,
        }
    }

    pub fn record(&self) -> EpochRecord {
        let unclaimed = self.unclaimed();
        EpochRecord {
            filled: self.is_filled(),
            currency0: self.currency0,
            currency1: self.currency1,
            token0_total: unclaimed.amount0,
            token1_total: unclaimed.amount1,
            liquidity_total: self.liquidity_total,
        }
    }
}

/// Flat read-only view of an epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct EpochRecord {
    pub filled: bool,
    pub currency0: Address,
    pub currency1: Address,
    pub token0_total: u128,
    pub token1_total: u128,
    pub liquidity_total: u128,
}

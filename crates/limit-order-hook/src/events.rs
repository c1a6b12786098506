//! Event definitions

use crate::types::{Address, Epoch, PoolKey, TokenAmounts};

/// Emitted when liquidity is added to a slot's epoch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    pub owner: Address,
    pub epoch: Epoch,
    pub pool: PoolKey,
    pub tick_lower: i32,
    pub zero_for_one: bool,
    pub liquidity: u128,
}

/// Emitted when a trade crosses a slot's range and its epoch fills
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Fill {
    pub epoch: Epoch,
    pub pool: PoolKey,
    pub tick_lower: i32,
    pub zero_for_one: bool,
    pub proceeds: TokenAmounts,
}

/// Emitted when a depositor exits an unfilled epoch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Kill {
    pub owner: Address,
    pub epoch: Epoch,
    pub pool: PoolKey,
    pub tick_lower: i32,
    pub zero_for_one: bool,
    pub liquidity: u128,
    pub amounts: TokenAmounts,
}

/// Emitted when a depositor claims proceeds from a filled epoch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Withdraw {
    pub owner: Address,
    pub epoch: Epoch,
    pub liquidity: u128,
    pub amounts: TokenAmounts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum HookEvent {
    Place(Place),
    Fill(Fill),
    Kill(Kill),
    Withdraw(Withdraw),
}

//! # AMM Core Interface
//!
//! The hook never touches pool state directly. Liquidity changes, price reads
//! and token payouts all go through this trait, implemented by the AMM core
//! the hook is attached to. All liquidity calls act on the hook's own position
//! in the given range.
//!
//! Every method runs inside the caller's unit of work: if the hook returns an
//! error after some of these calls succeeded, the environment is expected to
//! roll them back together with the failed operation.

use crate::errors::HookResult;
use crate::types::{Address, PoolKey, Slot0, TokenAmounts};

pub trait AmmCore {
    /// Current price of the pool
    fn slot0(&self, pool: &PoolKey) -> HookResult<Slot0>;

    /// Add `liquidity` to the hook's position in `[tick_lower, tick_upper)`,
    /// pulling the required tokens from `payer`. Returns the amounts paid.
    fn mint_range_liquidity(
        &mut self,
        pool: &PoolKey,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
        payer: &Address,
    ) -> HookResult<TokenAmounts>;

    /// Remove `liquidity` from the hook's position in `[tick_lower, tick_upper)`.
    /// Returns principal plus every fee accrued by the position; the tokens
    /// stay in the AMM's custody until taken or donated. Burning zero
    /// liquidity collects fees only.
    fn burn_range_liquidity(
        &mut self,
        pool: &PoolKey,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
    ) -> HookResult<TokenAmounts>;

    /// Donate tokens held for the hook to the pool's in-range liquidity
    fn donate(&mut self, pool: &PoolKey, amounts: TokenAmounts) -> HookResult<()>;

    /// Pay tokens held for the hook out to `to`
    fn take(&mut self, currency: &Address, to: &Address, amount: u128) -> HookResult<()>;
}

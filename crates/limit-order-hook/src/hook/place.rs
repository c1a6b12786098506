use tracing::{info, warn};

use super::LimitOrderHook;
use crate::amm::AmmCore;
use crate::errors::{HookError, HookResult};
use crate::events::{HookEvent, Place};
use crate::math::order_range;
use crate::types::{Address, Epoch, OrderSlot, PoolKey};
use crate::validation::validate_order_range;

impl LimitOrderHook {
    /// Add `liquidity` from `owner` to the order resting in
    /// `[tick_lower, tick_lower + tick_spacing)`. Returns the slot's epoch.
    pub fn place<A: AmmCore>(
        &mut self,
        amm: &mut A,
        owner: &Address,
        pool: &PoolKey,
        tick_lower: i32,
        zero_for_one: bool,
        liquidity: u128,
    ) -> HookResult<Epoch> {
        if liquidity == 0 {
            return Err(HookError::ZeroLiquidity);
        }
        let (tick_lower, tick_upper) = order_range(tick_lower, pool.tick_spacing)?;
        if self.ledger.cursor(pool).is_none() {
            return Err(HookError::PoolNotInitialized);
        }

        let slot0 = amm.slot0(pool)?;
        if let Err(err) = validate_order_range(slot0, pool.tick_spacing, tick_lower, zero_for_one) {
            warn!(%owner, tick = slot0.tick, tick_lower, zero_for_one, %err, "order rejected");
            return Err(err);
        }

        let paid = amm.mint_range_liquidity(pool, tick_lower, tick_upper, liquidity, owner)?;
        // The AMM is authoritative on which side of the price the range sits
        let other_side = if zero_for_one { paid.amount1 } else { paid.amount0 };
        if other_side != 0 {
            return Err(HookError::InRange);
        }

        let slot = OrderSlot::new(*pool, tick_lower, zero_for_one);
        let epoch = self.ledger.add_deposit(&slot, owner, liquidity)?;

        info!(
            %owner,
            epoch = epoch.0,
            tick_lower,
            zero_for_one,
            liquidity,
            amount0 = paid.amount0,
            amount1 = paid.amount1,
            "order placed"
        );
        self.emit(HookEvent::Place(Place {
            owner: *owner,
            epoch,
            pool: *pool,
            tick_lower,
            zero_for_one,
            liquidity,
        }));
        Ok(epoch)
    }
}

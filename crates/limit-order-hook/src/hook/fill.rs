use tracing::{debug, info, warn};

use super::LimitOrderHook;
use crate::amm::AmmCore;
use crate::errors::{HookError, HookResult};
use crate::events::{Fill, HookEvent};
use crate::math::{ranges_between, safe_add_i32, safe_sub_i32, tick_lower_for};
use crate::types::{OrderSlot, PoolKey, TokenAmounts};

impl LimitOrderHook {
    /// Called by the AMM core after every trade on `pool`, before the trade
    /// is considered complete.
    ///
    /// Walks every range boundary between the range observed after the
    /// previous trade and the current one, in the order the price crossed
    /// them, and fills each active order whose range was swept.
    ///
    /// A downward trade that stops exactly on a boundary has swept the whole
    /// range starting at that boundary, so the price is counted as sitting in
    /// the range below it.
    pub fn after_swap<A: AmmCore>(
        &mut self,
        amm: &mut A,
        pool: &PoolKey,
        trade_zero_for_one: bool,
    ) -> HookResult<()> {
        let tick_lower_last = self
            .ledger
            .cursor(pool)
            .ok_or(HookError::PoolNotInitialized)?;
        let slot0 = amm.slot0(pool)?;
        let tick = if trade_zero_for_one && slot0.price_on_tick {
            safe_sub_i32(slot0.tick, 1)?
        } else {
            slot0.tick
        };
        let tick_lower = tick_lower_for(tick, pool.tick_spacing);
        if tick_lower == tick_lower_last {
            return Ok(());
        }

        let crossed = ranges_between(tick_lower_last, tick_lower, pool.tick_spacing);
        let max = self.config.max_crossings_per_trade;
        if crossed > u64::from(max) {
            return Err(HookError::TooManyCrossings { crossed, max });
        }

        let price_rose = tick_lower > tick_lower_last;
        // Selling token0 pushes the price down, which fills orders selling token1
        let zero_for_one = !trade_zero_for_one;
        if price_rose != zero_for_one {
            warn!(
                tick_lower_last,
                tick_lower, trade_zero_for_one, "price moved against the trade direction"
            );
        }
        debug!(tick_lower_last, tick_lower, crossed, zero_for_one, "scanning crossed ranges");

        let step = if price_rose {
            pool.tick_spacing
        } else {
            -pool.tick_spacing
        };

        // Burn everything first; the ledger is only written once no AMM call
        // can fail any more.
        let mut fills: Vec<(OrderSlot, TokenAmounts)> = Vec::new();
        let mut boundary = tick_lower_last;
        for _ in 0..crossed {
            let slot = OrderSlot::new(*pool, boundary, zero_for_one);
            let epoch = self.ledger.get_epoch(&slot);
            if !epoch.is_default() {
                let liquidity = self
                    .ledger
                    .epoch_info(epoch)
                    .ok_or(HookError::InvariantViolation(
                        "active slot points at a missing epoch",
                    ))?
                    .liquidity_total;
                let proceeds =
                    amm.burn_range_liquidity(pool, boundary, slot.tick_upper(), liquidity)?;
                fills.push((slot, proceeds));
            }
            boundary = safe_add_i32(boundary, step)?;
        }

        for (slot, proceeds) in fills {
            let epoch = self.ledger.close_slot_as_filled(&slot, proceeds)?;
            info!(
                epoch = epoch.0,
                tick_lower = slot.tick_lower,
                zero_for_one,
                amount0 = proceeds.amount0,
                amount1 = proceeds.amount1,
                "order filled"
            );
            self.emit(HookEvent::Fill(Fill {
                epoch,
                pool: *pool,
                tick_lower: slot.tick_lower,
                zero_for_one,
                proceeds,
            }));
        }

        self.ledger.set_cursor(pool, tick_lower);
        Ok(())
    }
}

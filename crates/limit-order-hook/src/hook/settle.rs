use tracing::{debug, info};

use super::LimitOrderHook;
use crate::amm::AmmCore;
use crate::errors::{HookError, HookResult};
use crate::events::{HookEvent, Kill, Withdraw};
use crate::types::{Address, Epoch, OrderSlot, PoolKey, TokenAmounts};

impl LimitOrderHook {
    /// Withdraw `owner`'s whole share of a slot's unfilled epoch, paying the
    /// tokens to `to`.
    pub fn kill<A: AmmCore>(
        &mut self,
        amm: &mut A,
        owner: &Address,
        pool: &PoolKey,
        tick_lower: i32,
        zero_for_one: bool,
        to: &Address,
    ) -> HookResult<TokenAmounts> {
        let slot = OrderSlot::new(*pool, tick_lower, zero_for_one);
        let epoch = self.ledger.get_epoch(&slot);
        let info = self
            .ledger
            .epoch_info(epoch)
            .ok_or(HookError::ZeroLiquidity)?;
        if info.is_filled() {
            return Err(HookError::Filled(epoch.0));
        }
        let liquidity = info.liquidity_of(owner);
        if liquidity == 0 {
            return Err(HookError::ZeroLiquidity);
        }
        let removing_all = liquidity == info.liquidity_total;
        let tick_upper = slot.tick_upper();

        // Burns return principal and fees together, and fees cannot be split
        // pro rata. Donate them first so a partial exit cannot take fees
        // earned by everyone.
        if !removing_all {
            let fees = amm.burn_range_liquidity(pool, tick_lower, tick_upper, 0)?;
            if !fees.is_zero() {
                amm.donate(pool, fees)?;
                debug!(
                    epoch = epoch.0,
                    fee0 = fees.amount0,
                    fee1 = fees.amount1,
                    "donated accrued fees"
                );
            }
        }

        let amounts = amm.burn_range_liquidity(pool, tick_lower, tick_upper, liquidity)?;
        pay_out(amm, pool.currency0, pool.currency1, to, amounts)?;
        self.ledger.remove_deposit(epoch, owner)?;

        info!(
            %owner,
            epoch = epoch.0,
            tick_lower,
            zero_for_one,
            liquidity,
            amount0 = amounts.amount0,
            amount1 = amounts.amount1,
            "order killed"
        );
        self.emit(HookEvent::Kill(Kill {
            owner: *owner,
            epoch,
            pool: *pool,
            tick_lower,
            zero_for_one,
            liquidity,
            amounts,
        }));
        Ok(amounts)
    }

    /// Claim `owner`'s share of a filled epoch's proceeds, paying them to `to`.
    ///
    /// The share is taken of the proceeds and liquidity total recorded at fill
    /// time, so earlier claims by other depositors do not change it.
    pub fn withdraw<A: AmmCore>(
        &mut self,
        amm: &mut A,
        owner: &Address,
        epoch: Epoch,
        to: &Address,
    ) -> HookResult<TokenAmounts> {
        let (liquidity, amounts) = self.ledger.preview_claim(epoch, owner)?;
        let (currency0, currency1) = self
            .ledger
            .epoch_info(epoch)
            .map(|info| (info.currency0, info.currency1))
            .ok_or(HookError::UnknownEpoch(epoch.0))?;

        pay_out(amm, currency0, currency1, to, amounts)?;
        self.ledger.claim(epoch, owner)?;

        info!(
            %owner,
            epoch = epoch.0,
            liquidity,
            amount0 = amounts.amount0,
            amount1 = amounts.amount1,
            "proceeds withdrawn"
        );
        self.emit(HookEvent::Withdraw(Withdraw {
            owner: *owner,
            epoch,
            liquidity,
            amounts,
        }));
        Ok(amounts)
    }
}

fn pay_out<A: AmmCore>(
    amm: &mut A,
    currency0: Address,
    currency1: Address,
    to: &Address,
    amounts: TokenAmounts,
) -> HookResult<()> {
    if amounts.amount0 > 0 {
        amm.take(&currency0, to, amounts.amount0)?;
    }
    if amounts.amount1 > 0 {
        amm.take(&currency1, to, amounts.amount1)?;
    }
    Ok(())
}

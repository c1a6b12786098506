//! # Limit Order Hook
//!
//! Entry points called by users (`place`, `kill`, `withdraw`) and by the AMM
//! core (`after_initialize`, `after_swap`). Each call either completes or
//! returns an error with the ledger unchanged: AMM calls happen first and
//! ledger writes are committed only once all of them succeeded.

mod fill;
mod place;
mod settle;

use tracing::debug;

use crate::config::HookConfig;
use crate::errors::{HookError, HookResult};
use crate::events::HookEvent;
use crate::ledger::EpochLedger;
use crate::math::{check_tick_spacing, is_tick_valid, tick_lower_for};
use crate::types::{Address, Epoch, EpochInfo, EpochRecord, OrderSlot, PoolKey};

#[derive(Debug, Clone, Default)]
pub struct LimitOrderHook {
    config: HookConfig,
    ledger: EpochLedger,
    events: Vec<HookEvent>,
}

impl LimitOrderHook {
    pub fn new(config: HookConfig) -> HookResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ledger: EpochLedger::new(),
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    pub fn ledger(&self) -> &EpochLedger {
        &self.ledger
    }

    /// Called by the AMM core once a pool using this hook is initialized
    pub fn after_initialize(&mut self, pool: &PoolKey, tick: i32) -> HookResult<()> {
        check_tick_spacing(pool.tick_spacing)?;
        if !is_tick_valid(tick) {
            return Err(HookError::TickOutOfRange);
        }
        if self.ledger.cursor(pool).is_some() {
            return Err(HookError::PoolAlreadyInitialized);
        }

        let tick_lower = tick_lower_for(tick, pool.tick_spacing);
        self.ledger.set_cursor(pool, tick_lower);
        debug!(tick, tick_lower, "pool initialized");
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn get_epoch(&self, pool: &PoolKey, tick_lower: i32, zero_for_one: bool) -> Epoch {
        self.ledger
            .get_epoch(&OrderSlot::new(*pool, tick_lower, zero_for_one))
    }

    pub fn get_epoch_liquidity(&self, epoch: Epoch, owner: &Address) -> u128 {
        self.ledger.get_epoch_liquidity(epoch, owner)
    }

    pub fn get_epoch_record(&self, epoch: Epoch) -> Option<EpochRecord> {
        self.ledger.epoch_record(epoch)
    }

    pub fn get_epoch_info(&self, epoch: Epoch) -> Option<&EpochInfo> {
        self.ledger.epoch_info(epoch)
    }

    /// Lower tick of the range the pool's price was in after the last trade
    pub fn get_tick_lower_last(&self, pool: &PoolKey) -> Option<i32> {
        self.ledger.cursor(pool)
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<HookEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: HookEvent) {
        if self.config.emit_events {
            self.events.push(event);
        }
    }
}

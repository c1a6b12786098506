//! # Epoch Ledger
//!
//! Single source of truth for order bookkeeping: an arena of epoch records
//! indexed by epoch id, the active epoch of every order slot, and the last
//! observed range of every pool.
//!
//! Mutators validate everything they need before writing, so a failed call
//! leaves the ledger as it was.

use std::collections::HashMap;

use crate::constants::EPOCH_FIRST;
use crate::errors::{HookError, HookResult};
use crate::math::{mul_div_u128, safe_add_u128, safe_sub_u128};
use crate::types::{
    Address, Epoch, EpochInfo, EpochRecord, EpochStatus, OrderSlot, PoolKey, TokenAmounts,
};

#[derive(Debug, Default, Clone)]
pub struct EpochLedger {
    /// Epoch `n` lives at index `n - 1`
    epochs: Vec<EpochInfo>,
    active: HashMap<OrderSlot, Epoch>,
    cursors: HashMap<PoolKey, i32>,
}

impl EpochLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Active epoch of a slot, `Epoch::DEFAULT` if none
    pub fn get_epoch(&self, slot: &OrderSlot) -> Epoch {
        self.active.get(slot).copied().unwrap_or(Epoch::DEFAULT)
    }

    pub fn epoch_info(&self, epoch: Epoch) -> Option<&EpochInfo> {
        let index = epoch.0.checked_sub(EPOCH_FIRST)?;
        self.epochs.get(usize::try_from(index).ok()?)
    }

    pub fn epoch_record(&self, epoch: Epoch) -> Option<EpochRecord> {
        self.epoch_info(epoch).map(EpochInfo::record)
    }

    pub fn get_epoch_liquidity(&self, epoch: Epoch, owner: &Address) -> u128 {
        self.epoch_info(epoch)
            .map(|info| info.liquidity_of(owner))
            .unwrap_or(0)
    }

    /// Id the next new epoch will receive
    pub fn next_epoch(&self) -> Epoch {
        Epoch(self.epochs.len() as u64 + EPOCH_FIRST)
    }

    pub fn cursor(&self, pool: &PoolKey) -> Option<i32> {
        self.cursors.get(pool).copied()
    }

    /// Tokens `owner` would receive from a filled epoch, along with the
    /// share that earns them. Claims use the fill-time proceeds and the
    /// frozen liquidity total, so they do not depend on claim order.
    pub fn preview_claim(
        &self,
        epoch: Epoch,
        owner: &Address,
    ) -> HookResult<(u128, TokenAmounts)> {
        let info = self
            .epoch_info(epoch)
            .ok_or(HookError::UnknownEpoch(epoch.0))?;

        let proceeds = match info.status {
            EpochStatus::Resting => return Err(HookError::NotFilled(epoch.0)),
            EpochStatus::Filled { proceeds, .. } => proceeds,
        };

        let share = info.liquidity_of(owner);
        if share == 0 {
            return Err(HookError::ZeroLiquidity);
        }

        let claim = TokenAmounts::new(
            mul_div_u128(proceeds.amount0, share, info.liquidity_total)?,
            mul_div_u128(proceeds.amount1, share, info.liquidity_total)?,
        );
        Ok((share, claim))
    }

    /// Verify slot pointers and share sums. Any error here is a bug in the
    /// ledger, never a user error.
    pub fn check_invariants(&self) -> HookResult<()> {
        for (slot, epoch) in &self.active {
            let info = self
                .epoch_info(*epoch)
                .ok_or(HookError::InvariantViolation("active slot points at a missing epoch"))?;
            if info.slot != *slot {
                return Err(HookError::InvariantViolation("active epoch belongs to another slot"));
            }
            if info.is_filled() {
                return Err(HookError::InvariantViolation("filled epoch still active"));
            }
            if info.liquidity_total == 0 {
                return Err(HookError::InvariantViolation("active epoch holds no liquidity"));
            }
        }

        for info in &self.epochs {
            if !info.is_filled() && info.shares_total() != info.liquidity_total {
                return Err(HookError::InvariantViolation("shares do not sum to liquidity total"));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    pub(crate) fn set_cursor(&mut self, pool: &PoolKey, tick_lower: i32) {
        self.cursors.insert(*pool, tick_lower);
    }

    /// Active epoch of a slot, allocating a fresh id if it has none
    pub(crate) fn get_or_create_epoch(&mut self, slot: &OrderSlot) -> Epoch {
        let epoch = self.get_epoch(slot);
        if !epoch.is_default() {
            return epoch;
        }

        let epoch = self.next_epoch();
        self.epochs.push(EpochInfo::new(*slot));
        self.active.insert(*slot, epoch);
        epoch
    }

    /// Record `liquidity` from `owner` against the slot's active epoch
    pub(crate) fn add_deposit(
        &mut self,
        slot: &OrderSlot,
        owner: &Address,
        liquidity: u128,
    ) -> HookResult<Epoch> {
        let current = self.get_epoch(slot);
        let liquidity_total = match self.epoch_info(current) {
            Some(info) => safe_add_u128(info.liquidity_total, liquidity)?,
            None => liquidity,
        };

        let epoch = self.get_or_create_epoch(slot);
        let info = self.epoch_info_mut(epoch)?;
        info.liquidity_total = liquidity_total;
        // A share never exceeds the total, so this cannot overflow
        *info.liquidity.entry(*owner).or_insert(0) += liquidity;
        Ok(epoch)
    }

    /// Drop `owner`'s share from a resting epoch and return it. The slot is
    /// released once the last depositor leaves.
    pub(crate) fn remove_deposit(&mut self, epoch: Epoch, owner: &Address) -> HookResult<u128> {
        let info = self.epoch_info_mut(epoch)?;
        if info.is_filled() {
            return Err(HookError::Filled(epoch.0));
        }

        let share = info.liquidity_of(owner);
        if share == 0 {
            return Err(HookError::ZeroLiquidity);
        }
        let liquidity_total = safe_sub_u128(info.liquidity_total, share)
            .map_err(|_| HookError::InvariantViolation("share exceeds liquidity total"))?;

        info.liquidity_total = liquidity_total;
        info.liquidity.remove(owner);
        let slot = info.slot;

        if liquidity_total == 0 {
            self.active.remove(&slot);
        }
        Ok(share)
    }

    /// Mark the slot's active epoch filled with `proceeds` and free the slot
    pub(crate) fn close_slot_as_filled(
        &mut self,
        slot: &OrderSlot,
        proceeds: TokenAmounts,
    ) -> HookResult<Epoch> {
        let epoch = self.get_epoch(slot);
        if epoch.is_default() {
            return Err(HookError::InvariantViolation("filling a slot with no active epoch"));
        }

        let info = self.epoch_info_mut(epoch)?;
        if info.is_filled() {
            return Err(HookError::InvariantViolation("epoch filled twice"));
        }
        info.status = EpochStatus::Filled {
            proceeds,
            unclaimed: proceeds,
        };

        self.active.remove(slot);
        Ok(epoch)
    }

    /// Pay out `owner`'s claim from the epoch's unclaimed totals and zero the
    /// share. `liquidity_total` is left untouched.
    pub(crate) fn claim(
        &mut self,
        epoch: Epoch,
        owner: &Address,
    ) -> HookResult<(u128, TokenAmounts)> {
        let (share, claim) = self.preview_claim(epoch, owner)?;

        let info = self.epoch_info_mut(epoch)?;
        let EpochStatus::Filled { proceeds, unclaimed } = info.status else {
            return Err(HookError::NotFilled(epoch.0));
        };
        let overdrawn = |_| HookError::InvariantViolation("claim exceeds unclaimed total");
        let unclaimed = TokenAmounts::new(
            safe_sub_u128(unclaimed.amount0, claim.amount0).map_err(overdrawn)?,
            safe_sub_u128(unclaimed.amount1, claim.amount1).map_err(overdrawn)?,
        );

        info.status = EpochStatus::Filled { proceeds, unclaimed };
        info.liquidity.remove(owner);
        Ok((share, claim))
    }

    fn epoch_info_mut(&mut self, epoch: Epoch) -> HookResult<&mut EpochInfo> {
        let index = epoch
            .0
            .checked_sub(EPOCH_FIRST)
            .and_then(|index| usize::try_from(index).ok())
            .ok_or(HookError::UnknownEpoch(epoch.0))?;
        self.epochs
            .get_mut(index)
            .ok_or(HookError::UnknownEpoch(epoch.0))
    }
}

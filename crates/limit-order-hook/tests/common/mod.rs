//! In-memory AMM core used by the integration tests.
//!
//! Pricing is flat 1:1: one unit of liquidity holds `width / AMOUNT_SCALE`
//! of a token across a range `width` ticks wide. Only the side of the price
//! a range sits on is modelled exactly.

#![allow(dead_code)]

use std::collections::HashMap;

use limit_order_hook::{
    Address, AmmCore, HookConfig, HookError, HookResult, LimitOrderHook, PoolKey, Slot0,
    TokenAmounts,
};

pub const SPACING: i32 = 60;
pub const AMOUNT_SCALE: u128 = 20_000;

pub const CURRENCY0: Address = Address::repeat_byte(0x10);
pub const CURRENCY1: Address = Address::repeat_byte(0x11);
pub const MANAGER: Address = Address::repeat_byte(0xee);
pub const WALLET: Address = Address::repeat_byte(0x0a);
pub const OTHER: Address = Address::repeat_byte(0x0b);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub currency: Address,
    pub from: Address,
    pub to: Address,
    pub amount: u128,
}

impl Transfer {
    pub fn new(currency: Address, from: Address, to: Address, amount: u128) -> Self {
        Self {
            currency,
            from,
            to,
            amount,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct MockPosition {
    liquidity: u128,
    fees: TokenAmounts,
}

#[derive(Debug, Clone)]
struct MockPool {
    slot0: Slot0,
    positions: HashMap<(i32, i32), MockPosition>,
    donated: TokenAmounts,
}

#[derive(Debug, Clone, Default)]
pub struct MockAmm {
    pools: HashMap<PoolKey, MockPool>,
    /// Tokens burned from hook positions, held by the manager for the hook
    credits: HashMap<Address, u128>,
    transfers: Vec<Transfer>,
    fail_burn_at: Option<i32>,
    two_sided_mints: bool,
}

pub fn pool() -> PoolKey {
    PoolKey {
        currency0: CURRENCY0,
        currency1: CURRENCY1,
        fee: 3000,
        tick_spacing: SPACING,
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Hook and AMM with `pool()` initialized at exactly tick 0
pub fn setup() -> (LimitOrderHook, MockAmm) {
    setup_with_config(HookConfig::default())
}

pub fn setup_with_config(config: HookConfig) -> (LimitOrderHook, MockAmm) {
    init_tracing();
    let mut hook = LimitOrderHook::new(config).unwrap();
    let mut amm = MockAmm::default();
    amm.initialize(&mut hook, &pool(), 0);
    (hook, amm)
}

/// Token amounts held by `liquidity` in `[tick_lower, tick_upper)` at `slot0`
pub fn amounts_for_liquidity(
    slot0: Slot0,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: u128,
    round_up: bool,
) -> TokenAmounts {
    let scaled = |ticks: i32| {
        let numerator = liquidity * ticks as u128;
        if round_up {
            numerator.div_ceil(AMOUNT_SCALE)
        } else {
            numerator / AMOUNT_SCALE
        }
    };

    let below = slot0.tick < tick_lower || (slot0.tick == tick_lower && slot0.price_on_tick);
    if below {
        TokenAmounts::new(scaled(tick_upper - tick_lower), 0)
    } else if slot0.tick >= tick_upper {
        TokenAmounts::new(0, scaled(tick_upper - tick_lower))
    } else {
        TokenAmounts::new(
            scaled(tick_upper - slot0.tick),
            scaled(slot0.tick - tick_lower),
        )
    }
}

impl MockAmm {
    pub fn initialize(&mut self, hook: &mut LimitOrderHook, pool: &PoolKey, tick: i32) {
        self.pools.insert(
            *pool,
            MockPool {
                slot0: Slot0::new(tick, true),
                positions: HashMap::new(),
                donated: TokenAmounts::ZERO,
            },
        );
        hook.after_initialize(pool, tick).unwrap();
    }

    /// Move the price and run the hook's post-trade callback. A failing
    /// callback reverts the whole trade.
    pub fn swap(
        &mut self,
        hook: &mut LimitOrderHook,
        pool: &PoolKey,
        zero_for_one: bool,
        tick: i32,
        price_on_tick: bool,
    ) -> HookResult<()> {
        let snapshot = self.clone();
        self.pool_mut(pool)?.slot0 = Slot0::new(tick, price_on_tick);

        if let Err(err) = hook.after_swap(self, pool, zero_for_one) {
            *self = snapshot;
            return Err(err);
        }
        Ok(())
    }

    /// Hook liquidity in a range
    pub fn liquidity(&self, pool: &PoolKey, tick_lower: i32, tick_upper: i32) -> u128 {
        self.pools
            .get(pool)
            .and_then(|p| p.positions.get(&(tick_lower, tick_upper)))
            .map(|position| position.liquidity)
            .unwrap_or(0)
    }

    pub fn accrue_fees(
        &mut self,
        pool: &PoolKey,
        tick_lower: i32,
        tick_upper: i32,
        fees: TokenAmounts,
    ) {
        let position = self
            .pools
            .get_mut(pool)
            .unwrap()
            .positions
            .entry((tick_lower, tick_upper))
            .or_default();
        position.fees.amount0 += fees.amount0;
        position.fees.amount1 += fees.amount1;
    }

    pub fn donated(&self, pool: &PoolKey) -> TokenAmounts {
        self.pools[pool].donated
    }

    pub fn fail_burns_at(&mut self, tick_lower: i32) {
        self.fail_burn_at = Some(tick_lower);
    }

    /// Report every later mint as taking both tokens, as an AMM would for a
    /// range straddling the price
    pub fn mint_two_sided(&mut self) {
        self.two_sided_mints = true;
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn take_transfers(&mut self) -> Vec<Transfer> {
        std::mem::take(&mut self.transfers)
    }

    fn pool_mut(&mut self, pool: &PoolKey) -> HookResult<&mut MockPool> {
        self.pools
            .get_mut(pool)
            .ok_or_else(|| HookError::amm("unknown pool"))
    }

    fn credit(&mut self, currency: Address, amount: u128) {
        *self.credits.entry(currency).or_insert(0) += amount;
    }

    fn debit(&mut self, currency: Address, amount: u128) -> HookResult<()> {
        let balance = self.credits.entry(currency).or_insert(0);
        *balance = balance
            .checked_sub(amount)
            .ok_or_else(|| HookError::amm("insufficient credit"))?;
        Ok(())
    }
}

impl AmmCore for MockAmm {
    fn slot0(&self, pool: &PoolKey) -> HookResult<Slot0> {
        self.pools
            .get(pool)
            .map(|p| p.slot0)
            .ok_or_else(|| HookError::amm("unknown pool"))
    }

    fn mint_range_liquidity(
        &mut self,
        pool: &PoolKey,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
        payer: &Address,
    ) -> HookResult<TokenAmounts> {
        let key = *pool;
        let two_sided = self.two_sided_mints;
        let state = self.pool_mut(pool)?;
        let mut amounts =
            amounts_for_liquidity(state.slot0, tick_lower, tick_upper, liquidity, true);
        if two_sided {
            amounts = TokenAmounts::new(amounts.amount0.max(1), amounts.amount1.max(1));
        }
        state
            .positions
            .entry((tick_lower, tick_upper))
            .or_default()
            .liquidity += liquidity;

        if amounts.amount0 > 0 {
            self.transfers
                .push(Transfer::new(key.currency0, *payer, MANAGER, amounts.amount0));
        }
        if amounts.amount1 > 0 {
            self.transfers
                .push(Transfer::new(key.currency1, *payer, MANAGER, amounts.amount1));
        }
        Ok(amounts)
    }

    fn burn_range_liquidity(
        &mut self,
        pool: &PoolKey,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
    ) -> HookResult<TokenAmounts> {
        if self.fail_burn_at == Some(tick_lower) {
            return Err(HookError::amm("burn failed"));
        }

        let key = *pool;
        let state = self.pool_mut(pool)?;
        let slot0 = state.slot0;
        let position = state
            .positions
            .get_mut(&(tick_lower, tick_upper))
            .ok_or_else(|| HookError::amm("no position"))?;
        position.liquidity = position
            .liquidity
            .checked_sub(liquidity)
            .ok_or_else(|| HookError::amm("insufficient position liquidity"))?;

        let principal = amounts_for_liquidity(slot0, tick_lower, tick_upper, liquidity, false);
        let fees = std::mem::take(&mut position.fees);
        let amounts = TokenAmounts::new(
            principal.amount0 + fees.amount0,
            principal.amount1 + fees.amount1,
        );

        self.credit(key.currency0, amounts.amount0);
        self.credit(key.currency1, amounts.amount1);
        Ok(amounts)
    }

    fn donate(&mut self, pool: &PoolKey, amounts: TokenAmounts) -> HookResult<()> {
        self.debit(pool.currency0, amounts.amount0)?;
        self.debit(pool.currency1, amounts.amount1)?;
        let state = self.pool_mut(pool)?;
        state.donated.amount0 += amounts.amount0;
        state.donated.amount1 += amounts.amount1;
        Ok(())
    }

    fn take(&mut self, currency: &Address, to: &Address, amount: u128) -> HookResult<()> {
        self.debit(*currency, amount)?;
        self.transfers
            .push(Transfer::new(*currency, MANAGER, *to, amount));
        Ok(())
    }
}

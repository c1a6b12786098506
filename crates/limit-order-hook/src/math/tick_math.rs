//! # Tick Math
//!
//! Spacing alignment for order ranges. Every order occupies exactly one
//! spacing-wide range `[tick_lower, tick_lower + tick_spacing)`.

use crate::constants::{MAX_TICK, MAX_TICK_SPACING, MIN_TICK, MIN_TICK_SPACING};
use crate::errors::{HookError, HookResult};

/// Check if a tick is within the supported range
pub fn is_tick_valid(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// Validate a pool's tick spacing
pub fn check_tick_spacing(tick_spacing: i32) -> HookResult<()> {
    if !(MIN_TICK_SPACING..=MAX_TICK_SPACING).contains(&tick_spacing) {
        return Err(HookError::InvalidTickSpacing);
    }
    Ok(())
}

/// Lower bound of the spacing-aligned range containing `tick`, rounding
/// towards negative infinity
pub fn tick_lower_for(tick: i32, tick_spacing: i32) -> i32 {
    let compressed = tick / tick_spacing;
    let compressed = if tick < 0 && tick % tick_spacing != 0 {
        compressed - 1
    } else {
        compressed
    };
    compressed * tick_spacing
}

/// Validate an order's lower tick and return the matching upper tick
pub fn order_range(tick_lower: i32, tick_spacing: i32) -> HookResult<(i32, i32)> {
    check_tick_spacing(tick_spacing)?;

    if tick_lower % tick_spacing != 0 {
        return Err(HookError::TickMisaligned {
            tick: tick_lower,
            tick_spacing,
        });
    }

    let tick_upper = tick_lower
        .checked_add(tick_spacing)
        .ok_or(HookError::TickOutOfRange)?;
    if !is_tick_valid(tick_lower) || !is_tick_valid(tick_upper) {
        return Err(HookError::TickOutOfRange);
    }

    Ok((tick_lower, tick_upper))
}

/// Number of range boundaries between two aligned lower bounds
pub fn ranges_between(from: i32, to: i32, tick_spacing: i32) -> u64 {
    let distance = (i64::from(to) - i64::from(from)).unsigned_abs();
    distance / tick_spacing.unsigned_abs() as u64
}

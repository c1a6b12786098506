//! # Range Validation
//!
//! Decides whether a one-sided deposit can rest in a range given the pool's
//! current price. A resting order must sit entirely on the side of the price
//! it fills towards; liquidity overlapping the price would trade immediately
//! and could not be told apart from ordinary in-range liquidity.

use crate::errors::{HookError, HookResult};
use crate::math::tick_lower_for;
use crate::types::Slot0;

/// Validate an aligned order range against the current price.
///
/// Let `c` be the lower tick of the range holding the price. The range at `c`
/// is legal only when the price sits exactly on `c`, and then only for
/// `zero_for_one` orders, since the whole range is token0 at that point.
pub fn validate_order_range(
    slot0: Slot0,
    tick_spacing: i32,
    tick_lower: i32,
    zero_for_one: bool,
) -> HookResult<()> {
    let current = tick_lower_for(slot0.tick, tick_spacing);
    let at_range_boundary = slot0.tick == current && slot0.price_on_tick;

    if tick_lower == current && !at_range_boundary {
        return Err(HookError::InRange);
    }

    let crossed = if zero_for_one {
        tick_lower < current
    } else {
        tick_lower >= current
    };
    if crossed {
        return Err(HookError::CrossedRange);
    }

    Ok(())
}

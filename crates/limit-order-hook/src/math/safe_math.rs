//! # Safe Math Operations
//!
//! Overflow-checked arithmetic for liquidity and token totals.

use crate::errors::{HookError, HookResult};

/// Macro to generate safe arithmetic functions
macro_rules! safe_arith {
    ($fn_name:ident, $type:ty, $checked_method:ident, $error:expr) => {
        /// Checked arithmetic returning a hook error on overflow/underflow
        pub fn $fn_name(a: $type, b: $type) -> HookResult<$type> {
            a.$checked_method(b).ok_or($error)
        }
    };
}

safe_arith!(safe_add_u128, u128, checked_add, HookError::MathOverflow);
safe_arith!(safe_sub_u128, u128, checked_sub, HookError::MathUnderflow);

safe_arith!(safe_add_i32, i32, checked_add, HookError::TickOutOfRange);
safe_arith!(safe_sub_i32, i32, checked_sub, HookError::TickOutOfRange);

//! Big integer operations for proportional claims
//!
//! Claims multiply a u128 amount by a u128 share before dividing by the
//! epoch's total liquidity, so the product needs 256 bits.

use crate::errors::{HookError, HookResult};

/// 256-bit unsigned integer for intermediate calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U256 {
    /// Low 128 bits
    pub lo: u128,
    /// High 128 bits
    pub hi: u128,
}

impl U256 {
    pub const ZERO: U256 = U256::new(0, 0);

    pub const fn new(lo: u128, hi: u128) -> Self {
        Self { lo, hi }
    }

    pub const fn from_u128(value: u128) -> Self {
        Self { lo: value, hi: 0 }
    }

    /// Convert to u128, returning None if overflow
    pub fn to_u128(&self) -> Option<u128> {
        if self.hi == 0 {
            Some(self.lo)
        } else {
            None
        }
    }

    pub fn checked_sub(&self, other: &U256) -> Option<U256> {
        let (lo, borrow) = self.lo.overflowing_sub(other.lo);
        let hi = self.hi.checked_sub(other.hi)?.checked_sub(borrow as u128)?;
        Some(U256::new(lo, hi))
    }

    fn shl1(&self) -> U256 {
        U256::new(self.lo << 1, (self.hi << 1) | (self.lo >> 127))
    }

    fn bit(&self, index: u32) -> bool {
        if index < 128 {
            (self.lo >> index) & 1 == 1
        } else {
            (self.hi >> (index - 128)) & 1 == 1
        }
    }

    /// Divide by a u128 divisor using binary long division, returning
    /// (quotient, remainder)
    pub fn div_rem_u128(&self, divisor: u128) -> Option<(U256, u128)> {
        if divisor == 0 {
            return None;
        }
        if self.hi == 0 {
            return Some((U256::from_u128(self.lo / divisor), self.lo % divisor));
        }

        let divisor = U256::from_u128(divisor);
        let mut quotient = U256::ZERO;
        let mut remainder = U256::ZERO;
        for index in (0..256).rev() {
            remainder = remainder.shl1();
            if self.bit(index) {
                remainder.lo |= 1;
            }
            if remainder >= divisor {
                // remainder < 2 * divisor < 2^129, so this cannot fail
                remainder = remainder.checked_sub(&divisor)?;
                if index < 128 {
                    quotient.lo |= 1u128 << index;
                } else {
                    quotient.hi |= 1u128 << (index - 128);
                }
            }
        }
        Some((quotient, remainder.lo))
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.hi.cmp(&other.hi) {
            std::cmp::Ordering::Equal => self.lo.cmp(&other.lo),
            ordering => ordering,
        }
    }
}

/// Multiply two u128 values and return as U256
pub fn mul_u128_to_u256(a: u128, b: u128) -> U256 {
    const MASK: u128 = u64::MAX as u128;

    let a_lo = a & MASK;
    let a_hi = a >> 64;
    let b_lo = b & MASK;
    let b_hi = b >> 64;

    let lo_lo = a_lo * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_lo = a_hi * b_lo;
    let hi_hi = a_hi * b_hi;

    // Each partial product fits in u128; carries are collected per 64-bit column
    let mid = (lo_lo >> 64) + (lo_hi & MASK) + (hi_lo & MASK);
    let lo = (lo_lo & MASK) | (mid << 64);
    let hi = hi_hi + (lo_hi >> 64) + (hi_lo >> 64) + (mid >> 64);

    U256::new(lo, hi)
}

/// result = floor((a * b) / denominator)
pub fn mul_div_u128(a: u128, b: u128, denominator: u128) -> HookResult<u128> {
    if denominator == 0 {
        return Err(HookError::DivisionByZero);
    }

    let (quotient, _) = mul_u128_to_u256(a, b)
        .div_rem_u128(denominator)
        .ok_or(HookError::DivisionByZero)?;
    quotient.to_u128().ok_or(HookError::MulDivOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u256_basic_ops() {
        let a = U256::from_u128(100);
        let b = U256::from_u128(200);

        assert_eq!(b.checked_sub(&a).unwrap().to_u128(), Some(100));
        assert!(a.checked_sub(&b).is_none());
        assert_eq!(
            U256::new(0, 1).checked_sub(&U256::from_u128(1)),
            Some(U256::from_u128(u128::MAX))
        );
        assert!(U256::new(0, 1) > U256::from_u128(u128::MAX));
    }

    #[test]
    fn test_wide_multiplication() {
        assert_eq!(mul_u128_to_u256(u128::MAX, 1), U256::from_u128(u128::MAX));
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        assert_eq!(
            mul_u128_to_u256(u128::MAX, u128::MAX),
            U256::new(1, u128::MAX - 1)
        );
        assert_eq!(mul_u128_to_u256(1u128 << 64, 1u128 << 64), U256::new(0, 1));
    }

    #[test]
    fn test_mul_div_truncates() {
        assert_eq!(mul_div_u128(10, 3, 4).unwrap(), 7);
        assert_eq!(mul_div_u128(9001, 2, 3).unwrap(), 6000);
        assert_eq!(mul_div_u128(10, 4, 5).unwrap(), 8);
    }

    #[test]
    fn test_mul_div_large_numbers() {
        let a = u128::MAX / 2;
        assert_eq!(mul_div_u128(a, 6, 6).unwrap(), a);
        assert_eq!(
            mul_div_u128(u128::MAX, u128::MAX, u128::MAX).unwrap(),
            u128::MAX
        );
        assert_eq!(mul_div_u128(u128::MAX, 2, 1), Err(HookError::MulDivOverflow));
        assert_eq!(mul_div_u128(1, 1, 0), Err(HookError::DivisionByZero));
    }
}

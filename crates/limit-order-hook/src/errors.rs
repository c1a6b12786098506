//! # Hook Error Types
//!
//! Every failure the hook can surface. Validation errors leave the ledger
//! untouched; invariant violations abort the enclosing operation; AMM core
//! failures are propagated unchanged.

use thiserror::Error;

/// Errors returned by limit-order hook operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize))]
pub enum HookError {
    // ========================================================================
    // Order Validation Errors
    // ========================================================================
    #[error("Zero liquidity")]
    ZeroLiquidity,

    #[error("Order range already crossed by the current price")]
    CrossedRange,

    #[error("Order range contains the current price")]
    InRange,

    #[error("Tick {tick} is not a multiple of tick spacing {tick_spacing}")]
    TickMisaligned { tick: i32, tick_spacing: i32 },

    #[error("Tick out of range")]
    TickOutOfRange,

    #[error("Invalid tick spacing")]
    InvalidTickSpacing,

    // ========================================================================
    // Epoch and Settlement Errors
    // ========================================================================
    #[error("Epoch {0} is not filled")]
    NotFilled(u64),

    #[error("Epoch {0} is already filled")]
    Filled(u64),

    #[error("Unknown epoch {0}")]
    UnknownEpoch(u64),

    // ========================================================================
    // Pool Errors
    // ========================================================================
    #[error("Pool not initialized")]
    PoolNotInitialized,

    #[error("Pool already initialized")]
    PoolAlreadyInitialized,

    #[error("Trade crossed {crossed} ranges (max {max})")]
    TooManyCrossings { crossed: u64, max: u32 },

    // ========================================================================
    // Math Errors
    // ========================================================================
    #[error("Math overflow")]
    MathOverflow,

    #[error("Math underflow")]
    MathUnderflow,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Mul div overflow")]
    MulDivOverflow,

    // ========================================================================
    // Internal and Collaborator Errors
    // ========================================================================
    #[error("Ledger invariant violated: {0}")]
    InvariantViolation(&'static str),

    #[error("AMM core call failed: {0}")]
    Amm(String),

    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

/// Result type using hook errors
pub type HookResult<T> = Result<T, HookError>;

impl HookError {
    /// Wrap a failure reported by the AMM core
    pub fn amm(reason: impl Into<String>) -> Self {
        Self::Amm(reason.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

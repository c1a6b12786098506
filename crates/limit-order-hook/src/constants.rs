//! # Hook Constants
//!
//! Tick bounds shared with the AMM core and defaults for hook configuration.

// ============================================================================
// Tick Bounds
// ============================================================================

/// Minimum tick supported by the AMM core
pub const MIN_TICK: i32 = -887_272;

/// Maximum tick supported by the AMM core
pub const MAX_TICK: i32 = 887_272;

/// Minimum tick spacing
pub const MIN_TICK_SPACING: i32 = 1;

/// Maximum tick spacing
pub const MAX_TICK_SPACING: i32 = 32_767;

// ============================================================================
// Epochs
// ============================================================================

/// Epoch id meaning "no active epoch"
pub const EPOCH_DEFAULT: u64 = 0;

/// First epoch id handed out by a fresh ledger
pub const EPOCH_FIRST: u64 = 1;

// ============================================================================
// Configuration Defaults
// ============================================================================

/// Default cap on ranges a single trade may sweep. Large enough to cover the
/// full tick domain at spacing 1.
pub const DEFAULT_MAX_CROSSINGS_PER_TRADE: u32 = (MAX_TICK as u32) * 2;

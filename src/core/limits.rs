/*!
 * System Limits and Constants
 *
 * Centralized location for defaults and thresholds used by the simulator.
 */

// =============================================================================
// MEMORY LIMITS
// =============================================================================

/// Total simulated memory (1000 KB)
/// Used as default capacity when no configuration overrides it
pub const DEFAULT_TOTAL_MEMORY: usize = 1000;

/// Unit label used when rendering sizes
pub const SIZE_UNIT: &str = "KB";

// =============================================================================
// MEMORY PRESSURE
// =============================================================================

/// Usage ratio at which pressure is reported as medium
pub const PRESSURE_MEDIUM: f64 = 0.60;

/// Usage ratio at which pressure is reported as high
pub const PRESSURE_HIGH: f64 = 0.80;

/// Usage ratio at which pressure is reported as critical
pub const PRESSURE_CRITICAL: f64 = 0.95;

//! Shared angle utilities for placement calculations.

/// Full circle in degrees.
pub const FULL_CIRCLE_DEG: f64 = 360.0;

/// Normalize an angle to [0, 360) degrees.
///
/// `((x mod 360) + 360) mod 360`. Idempotent. Non-finite input is
/// returned as NaN and must be rejected upstream.
pub fn normalize_360(deg: f64) -> f64 {
    ((deg % FULL_CIRCLE_DEG) + FULL_CIRCLE_DEG) % FULL_CIRCLE_DEG
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Proportional position control with a dead-band.
//!
//! Works in `no_std`, keeps no state and does not allocate memory.

use crate::config::AxisTuning;

/// Drive command for a position error (`target - position`).
///
/// Inside the tolerance band the output is exactly `0.0`. Outside it the output is
/// `error / slowdown`, saturating at ±1.
#[inline]
pub fn proportional(error: f32, tuning: &AxisTuning) -> f32 {
    if libm::fabsf(error) < tuning.tolerance {
        0.0
    } else {
        (error / tuning.slowdown).clamp(-1.0, 1.0)
    }
}

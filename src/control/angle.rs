// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Heading arithmetic on the unit circle.
//!
//! Every heading handled by the steering code lives in `[0, 2π)`. These helpers keep it there and
//! pick the shorter way around when turning from one heading to another.

use core::f32::consts::TAU;

/// Wrap `angle` (radians) into `[0, 2π)`.
///
/// This is a true modulo, so negative inputs land on the positive side of the circle. A result
/// that rounds up to exactly `2π` is folded back to `0.0`.
#[inline]
pub fn canonicalize(angle: f32) -> f32 {
    let r = libm::fmodf(angle, TAU);
    let r = if r < 0.0 { r + TAU } else { r };
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Signed rotation in `(-π, π]` that takes `current` onto `target`, modulo full turns.
///
/// Positive is counter-clockwise. When both ways around are exactly half a turn the
/// counter-clockwise `+π` is returned.
#[inline]
pub fn shortest_turn(current: f32, target: f32) -> f32 {
    let ccw = canonicalize(target - current);
    let cw = TAU - ccw;
    if ccw <= cw {
        ccw
    } else {
        -cw
    }
}

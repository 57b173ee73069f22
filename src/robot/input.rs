// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! One cycle's worth of operator input.

use serde::{Deserialize, Serialize};

/// Gamepad state sampled once per cycle.
///
/// Stick axes are in `[-1.0, 1.0]` with `+y` pointing away from the driver. Reading the gamepad
/// itself is left to the platform layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorInput {
    pub drive_x: f32,
    pub drive_y: f32,

    pub dpad_up: bool,
    pub dpad_down: bool,

    pub left_bumper: bool,
    pub right_bumper: bool,

    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
}

impl OperatorInput {
    /// Input with only the drive stick deflected.
    pub fn stick(x: f32, y: f32) -> Self {
        Self {
            drive_x: x,
            drive_y: y,
            ..Self::default()
        }
    }
}

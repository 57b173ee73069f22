// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Closed-loop preset controller for the two-sided lift ("stilts").
//!
//! Each side has its own actuator and height sensor and is driven independently toward the
//! current preset with a dead-banded proportional law. The operator steps through the preset table
//! one entry at a time, and a step is only accepted once both sides have arrived, so presets can't
//! be skipped mid-travel.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! loop {
//!     lift.update(dpad_up, dpad_down);
//!     lift.go();
//!     delay.delay_ms(20_u32);
//! }
//! ```

use core::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::{validate_presets, ConfigError, LiftConfig, Preset, Side};
use crate::control::deadband::proportional;
use crate::motors::{Actuator, PositionSensor};

/// Hardware for one side of the lift.
pub struct LiftSide<S, A> {
    sensor: S,
    actuator: A,
}

impl<S: PositionSensor, A: Actuator> LiftSide<S, A> {
    pub fn new(sensor: S, actuator: A) -> Self {
        Self { sensor, actuator }
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.sensor.position()
    }

    pub fn free(self) -> (S, A) {
        (self.sensor, self.actuator)
    }
}

/// Diagnostic snapshot of the lift.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiftReport {
    pub left_position: f32,
    pub right_position: f32,
    pub left_power: f32,
    pub right_power: f32,
    pub preset: usize,
    pub at_target: bool,
}

impl fmt::Display for LiftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left power: ({:.2}), left height: ({:.2}), right power: ({:.2}), right height: ({:.2}), preset: {}, at target: {}",
            self.left_power,
            self.left_position,
            self.right_power,
            self.right_position,
            self.preset,
            self.at_target
        )
    }
}

/// Both sensor readings for one cycle. Taken once, before any output is computed.
#[derive(Copy, Clone)]
struct Heights {
    left: f32,
    right: f32,
}

/// Controller state and configuration.
pub struct LiftPositionController<LS, LA, RS, RA, const N: usize> {
    left: LiftSide<LS, LA>,
    right: LiftSide<RS, RA>,
    config: LiftConfig,

    presets: [Preset; N],
    preset_index: usize,

    at_target: bool,
    left_power: f32,
    right_power: f32,
}

impl<LS, LA, RS, RA, const N: usize> LiftPositionController<LS, LA, RS, RA, N>
where
    LS: PositionSensor,
    LA: Actuator,
    RS: PositionSensor,
    RA: Actuator,
{
    /// Create a controller aimed at preset 0.
    ///
    /// The sensors are sampled once so the outputs and the at-target flag are meaningful before the
    /// first [`update`](Self::update). Nothing is written to the actuators.
    pub fn new(
        left: LiftSide<LS, LA>,
        right: LiftSide<RS, RA>,
        presets: [Preset; N],
        config: LiftConfig,
    ) -> Result<Self, ConfigError> {
        Self::starting_at(left, right, presets, config, 0)
    }

    /// Like [`new`](Self::new), but aimed at preset `initial`.
    pub fn starting_at(
        left: LiftSide<LS, LA>,
        right: LiftSide<RS, RA>,
        presets: [Preset; N],
        config: LiftConfig,
        initial: usize,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_presets(&presets, initial)?;

        let mut ctrl = Self {
            left,
            right,
            config,
            presets,
            preset_index: initial,
            at_target: false,
            left_power: 0.0,
            right_power: 0.0,
        };
        let heights = ctrl.sample();
        ctrl.drive_toward(heights);
        Ok(ctrl)
    }

    /// Run one control step.
    ///
    /// `advance` / `retreat` request the next / previous preset. They are only honored when both
    /// sides are already at the current preset; at either end of the table they do nothing. If
    /// both are set, advance is applied first and retreat second.
    pub fn update(&mut self, advance: bool, retreat: bool) {
        let heights = self.sample();
        self.drive_toward(heights);

        if !self.at_target {
            if advance || retreat {
                debug!("lift: still moving to preset {}, request ignored", self.preset_index);
            }
            return;
        }

        let before = self.preset_index;
        if advance && self.preset_index + 1 < N {
            self.preset_index += 1;
        }
        if retreat && self.preset_index > 0 {
            self.preset_index -= 1;
        }

        if self.preset_index != before {
            info!("lift: preset {} -> {}", before, self.preset_index);
            // Respond to the new preset this cycle rather than the next.
            self.drive_toward(heights);
        }
    }

    /// Write both side powers to the actuators.
    pub fn go(&mut self) {
        self.left.actuator.set_power(self.left_power);
        self.right.actuator.set_power(self.right_power);
    }

    pub fn report(&self) -> LiftReport {
        LiftReport {
            left_position: self.left.position(),
            right_position: self.right.position(),
            left_power: self.left_power,
            right_power: self.right_power,
            preset: self.preset_index,
            at_target: self.at_target,
        }
    }

    /// Returns true if both sides were within tolerance on the last step.
    #[inline]
    pub fn at_target(&self) -> bool {
        self.at_target
    }

    #[inline]
    pub fn preset_index(&self) -> usize {
        self.preset_index
    }

    /// Target of the current preset.
    #[inline]
    pub fn target(&self) -> Preset {
        self.presets[self.preset_index]
    }

    #[inline]
    pub fn left_power(&self) -> f32 {
        self.left_power
    }

    #[inline]
    pub fn right_power(&self) -> f32 {
        self.right_power
    }

    pub fn config(&self) -> &LiftConfig {
        &self.config
    }

    /// Tear down and return both sides' hardware.
    pub fn free(self) -> (LiftSide<LS, LA>, LiftSide<RS, RA>) {
        (self.left, self.right)
    }

    fn sample(&self) -> Heights {
        Heights {
            left: self.left.position(),
            right: self.right.position(),
        }
    }

    fn drive_toward(&mut self, heights: Heights) {
        let target = self.presets[self.preset_index];
        self.left_power = self.side_power(target, Side::Left, heights.left);
        self.right_power = self.side_power(target, Side::Right, heights.right);
        self.at_target = self.left_power == 0.0 && self.right_power == 0.0;
    }

    #[inline]
    fn side_power(&self, target: Preset, side: Side, position: f32) -> f32 {
        proportional(target.target(side) - position, self.config.side(side))
    }
}

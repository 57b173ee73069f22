// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Uniform interface for everything the control cycle drives.

use core::fmt;

use crate::control::lift_controller::LiftPositionController;
use crate::control::steering_controller::SteeringController;
use crate::motors::{Actuator, Encoder, PositionSensor};

use super::input::OperatorInput;

/// A subsystem stepped once per control cycle.
///
/// The three phases are kept apart so that every component computes its outputs from the same
/// input snapshot before any motor moves.
pub trait Component {
    /// Compute outputs from this cycle's input. Must not touch hardware outputs.
    fn update(&mut self, input: &OperatorInput);

    /// Write the outputs computed by the last `update`.
    fn apply_outputs(&mut self);

    /// Write one line of diagnostics (no line terminator).
    fn report_state(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// The swerve module follows the drive stick.
impl<E, D, S> Component for SteeringController<E, D, S>
where
    E: Encoder,
    D: Actuator,
    S: Actuator,
{
    fn update(&mut self, input: &OperatorInput) {
        SteeringController::update(self, input.drive_x, input.drive_y);
    }

    fn apply_outputs(&mut self) {
        self.go();
    }

    fn report_state(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "swerve {}", self.report())
    }
}

/// D-pad up advances the lift one preset, d-pad down retreats one.
impl<LS, LA, RS, RA, const N: usize> Component for LiftPositionController<LS, LA, RS, RA, N>
where
    LS: PositionSensor,
    LA: Actuator,
    RS: PositionSensor,
    RA: Actuator,
{
    fn update(&mut self, input: &OperatorInput) {
        LiftPositionController::update(self, input.dpad_up, input.dpad_down);
    }

    fn apply_outputs(&mut self) {
        self.go();
    }

    fn report_state(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "lift {}", self.report())
    }
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Open-loop button-driven subsystems: the stacker and the intake.
//!
//! Each output is full power one way, full power the other way, or off. The helper functions hold
//! the button logic so it can be tested without any hardware.

use core::fmt;

use crate::motors::Actuator;

use super::component::Component;
use super::input::OperatorInput;

/// Stacker motor power. `lower` overrides `raise` when both are held.
#[inline]
pub fn stacker_power(raise: bool, lower: bool) -> f32 {
    if lower {
        -1.0
    } else if raise {
        1.0
    } else {
        0.0
    }
}

/// Intake roller power: `+1` pulling in, `-1` spitting out, `0` if both or neither.
#[inline]
pub fn intake_power(pull_in: bool, push_out: bool) -> f32 {
    signed_sum(pull_in, push_out)
}

/// Intake vertical assist power: `+1` up, `-1` down, `0` if both or neither.
#[inline]
pub fn vertical_power(up: bool, down: bool) -> f32 {
    signed_sum(up, down)
}

fn signed_sum(plus: bool, minus: bool) -> f32 {
    let mut power = 0.0;
    if plus {
        power += 1.0;
    }
    if minus {
        power -= 1.0;
    }
    power
}

/// Single-motor stacker on the bumpers (right raises, left lowers).
pub struct Stacker<M> {
    motor: M,
    power: f32,
}

impl<M: Actuator> Stacker<M> {
    pub fn new(motor: M) -> Self {
        Self { motor, power: 0.0 }
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    pub fn free(self) -> M {
        self.motor
    }
}

impl<M: Actuator> Component for Stacker<M> {
    fn update(&mut self, input: &OperatorInput) {
        self.power = stacker_power(input.right_bumper, input.left_bumper);
    }

    fn apply_outputs(&mut self) {
        self.motor.set_power(self.power);
    }

    fn report_state(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "stacker power: ({:.2})", self.power)
    }
}

/// Two opposed rollers plus a vertical assist servo.
///
/// X pulls in and B pushes out; Y raises and A lowers. The rollers face each other, so the right
/// one receives the negated command.
pub struct Intake<L, R, V> {
    left_roller: L,
    right_roller: R,
    vertical: V,

    intake_power: f32,
    vertical_power: f32,
}

impl<L: Actuator, R: Actuator, V: Actuator> Intake<L, R, V> {
    pub fn new(left_roller: L, right_roller: R, vertical: V) -> Self {
        Self {
            left_roller,
            right_roller,
            vertical,
            intake_power: 0.0,
            vertical_power: 0.0,
        }
    }

    pub fn intake_power(&self) -> f32 {
        self.intake_power
    }

    pub fn vertical_power(&self) -> f32 {
        self.vertical_power
    }

    pub fn free(self) -> (L, R, V) {
        (self.left_roller, self.right_roller, self.vertical)
    }
}

impl<L: Actuator, R: Actuator, V: Actuator> Component for Intake<L, R, V> {
    fn update(&mut self, input: &OperatorInput) {
        self.intake_power = intake_power(input.x, input.b);
        self.vertical_power = vertical_power(input.y, input.a);
    }

    fn apply_outputs(&mut self) {
        self.left_roller.set_power(self.intake_power);
        self.right_roller.set_power(-self.intake_power);
        self.vertical.set_power(self.vertical_power);
    }

    fn report_state(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            "intake power: ({:.2}), vertical power: ({:.2})",
            self.intake_power, self.vertical_power
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::sim::SimActuator;
    use core::cell::Cell;

    #[test]
    fn stacker_lower_wins() {
        assert_eq!(stacker_power(false, false), 0.0);
        assert_eq!(stacker_power(true, false), 1.0);
        assert_eq!(stacker_power(false, true), -1.0);
        assert_eq!(stacker_power(true, true), -1.0);
    }

    #[test]
    fn opposing_buttons_cancel() {
        assert_eq!(intake_power(true, true), 0.0);
        assert_eq!(intake_power(true, false), 1.0);
        assert_eq!(intake_power(false, true), -1.0);
        assert_eq!(vertical_power(true, true), 0.0);
        assert_eq!(vertical_power(false, true), -1.0);
    }

    #[test]
    fn stacker_component_follows_bumpers() {
        let out = Cell::new(0.0);
        let mut stacker = Stacker::new(SimActuator::new(&out));
        stacker.update(&OperatorInput {
            right_bumper: true,
            ..OperatorInput::default()
        });
        stacker.apply_outputs();
        assert_eq!(out.get(), 1.0);

        stacker.update(&OperatorInput::default());
        stacker.apply_outputs();
        assert_eq!(out.get(), 0.0);
    }

    #[test]
    fn intake_rollers_are_opposed() {
        let (l, r, v) = (Cell::new(0.0), Cell::new(0.0), Cell::new(0.0));
        let mut intake = Intake::new(
            SimActuator::new(&l),
            SimActuator::new(&r),
            SimActuator::new(&v),
        );
        intake.update(&OperatorInput {
            x: true,
            a: true,
            ..OperatorInput::default()
        });
        intake.apply_outputs();
        assert_eq!(l.get(), 1.0);
        assert_eq!(r.get(), -1.0);
        assert_eq!(v.get(), -1.0);

        let mut line = String::new();
        intake.report_state(&mut line).unwrap();
        assert_eq!(line, "intake power: (1.00), vertical power: (-1.00)");
    }
}

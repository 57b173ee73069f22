// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Heading controller for one swerve module.
//!
//! The module has a continuous-rotation steering servo and a pair of ganged drive motors. Any
//! wheel heading can be reached either by steering to it, or by steering to the opposite heading
//! and spinning the drive motors backwards. Every cycle both options are evaluated and the shorter
//! one wins, so in steady state the steering axis never has to travel more than a quarter turn.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! loop {
//!     steering.update(stick_x, stick_y);
//!     steering.go();
//!     delay.delay_ms(20_u32);
//! }
//! ```

use core::f32::consts::{PI, TAU};
use core::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, SteeringConfig};
use crate::control::angle::{canonicalize, shortest_turn};
use crate::motors::{Actuator, Encoder};

/// Drive polarity of the module.
///
/// In `Reverse` the module's effective heading is the wheel angle plus π and the drive motors spin
/// backwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Reverse => f.write_str("reverse"),
        }
    }
}

/// Diagnostic snapshot of a swerve module.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SteeringReport {
    /// Effective heading in `[0, 2π)`, read fresh from the encoder.
    pub heading: f32,
    pub direction: Direction,
    pub steer_power: f32,
    pub drive_power: f32,
    /// Signed turn (radians) picked on the last update, before clamping to a servo command.
    pub turn: f32,
}

impl fmt::Display for SteeringReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "heading: ({:.3}), direction: ({}), steer: ({:.2}), drive: ({:.2})",
            self.heading, self.direction, self.steer_power, self.drive_power
        )
    }
}

/// Swerve module steering controller.
///
/// - `E`: steering encoder
/// - `D`: drive motors (use [`Ganged`](crate::motors::Ganged) for a pair)
/// - `S`: steering servo
pub struct SteeringController<E, D, S> {
    encoder: E,
    drive: D,
    steer: S,

    counts_per_rev: u32,

    /// Only ever changed through `toggle_direction`.
    direction: Direction,

    drive_power: f32,
    steer_power: f32,
    last_turn: f32,
}

impl<E, D, S> SteeringController<E, D, S>
where
    E: Encoder,
    D: Actuator,
    S: Actuator,
{
    /// Bind a controller to its hardware. Starts in `Forward` with both outputs at zero.
    pub fn new(encoder: E, drive: D, steer: S, config: SteeringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            encoder,
            drive,
            steer,
            counts_per_rev: config.counts_per_rev,
            direction: Direction::Forward,
            drive_power: 0.0,
            steer_power: 0.0,
            last_turn: 0.0,
        })
    }

    /// Compute this cycle's outputs from a direction vector with components in `[-1, 1]`.
    ///
    /// Nothing is written to hardware until [`go`](Self::go).
    pub fn update(&mut self, x: f32, y: f32) {
        let magnitude = libm::sqrtf(x * x + y * y).clamp(-1.0, 1.0);

        if magnitude == 0.0 {
            // No direction given: hold the wheel where it is.
            self.steer_power = 0.0;
            self.last_turn = 0.0;
        } else {
            let count = self.encoder.count();
            let target = canonicalize(libm::atan2f(y, x));
            let current = self.heading_for_count(count);
            let about_face = canonicalize(current + PI);

            let turn_keep = shortest_turn(current, target);
            let turn_flip = shortest_turn(about_face, target);

            let turn = if libm::fabsf(turn_flip) < libm::fabsf(turn_keep) {
                self.toggle_direction();
                turn_flip
            } else {
                turn_keep
            };
            self.last_turn = turn;
            self.steer_power = -turn.clamp(-1.0, 1.0);
        }

        self.drive_power = match self.direction {
            Direction::Forward => magnitude,
            Direction::Reverse => -magnitude,
        };
    }

    /// Write the current outputs to the motors. Calling it twice writes the same values twice.
    pub fn go(&mut self) {
        self.drive.set_power(self.drive_power);
        self.steer.set_power(self.steer_power);
    }

    pub fn report(&self) -> SteeringReport {
        SteeringReport {
            heading: self.heading(),
            direction: self.direction,
            steer_power: self.steer_power,
            drive_power: self.drive_power,
            turn: self.last_turn,
        }
    }

    /// Physical wheel angle in `[0, 2π)`, ignoring the drive polarity.
    pub fn wheel_angle(&self) -> f32 {
        self.wheel_angle_for_count(self.encoder.count())
    }

    /// Effective heading in `[0, 2π)`: the wheel angle, offset by π when in `Reverse`.
    pub fn heading(&self) -> f32 {
        self.heading_for_count(self.encoder.count())
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn drive_power(&self) -> f32 {
        self.drive_power
    }

    #[inline]
    pub fn steer_power(&self) -> f32 {
        self.steer_power
    }

    /// Tear down and return the hardware handles.
    pub fn free(self) -> (E, D, S) {
        (self.encoder, self.drive, self.steer)
    }

    fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
        debug!("swerve: drive direction now {}", self.direction);
    }

    fn wheel_angle_for_count(&self, count: i32) -> f32 {
        // Only the angle modulo one revolution matters, so fold the count first and keep the
        // float conversion exact.
        let cpr = i64::from(self.counts_per_rev);
        let folded = i64::from(count).rem_euclid(cpr);
        canonicalize(TAU * folded as f32 / cpr as f32)
    }

    fn heading_for_count(&self, count: i32) -> f32 {
        let wheel = self.wheel_angle_for_count(count);
        match self.direction {
            Direction::Forward => wheel,
            Direction::Reverse => canonicalize(wheel + PI),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::sim::{SimActuator, SimEncoder};
    use core::cell::Cell;
    use core::f32::consts::FRAC_PI_2;

    struct Rig {
        count: Cell<i32>,
        drive: Cell<f32>,
        steer: Cell<f32>,
    }

    impl Rig {
        fn new(count: i32) -> Self {
            Self {
                count: Cell::new(count),
                drive: Cell::new(0.0),
                steer: Cell::new(0.0),
            }
        }

        fn controller(
            &self,
        ) -> SteeringController<SimEncoder<'_>, SimActuator<'_>, SimActuator<'_>> {
            SteeringController::new(
                SimEncoder::new(&self.count),
                SimActuator::new(&self.drive),
                SimActuator::new(&self.steer),
                SteeringConfig::default(),
            )
            .unwrap()
        }
    }

    #[test]
    fn rejects_zero_resolution() {
        let rig = Rig::new(0);
        let res = SteeringController::new(
            SimEncoder::new(&rig.count),
            SimActuator::new(&rig.drive),
            SimActuator::new(&rig.steer),
            SteeringConfig::default().with_counts_per_rev(0),
        );
        assert!(matches!(res, Err(ConfigError::ZeroCountsPerRev)));
    }

    #[test]
    fn zero_input_holds_wheel() {
        let rig = Rig::new(1234);
        let mut c = rig.controller();
        c.update(0.0, 1.0);
        assert_ne!(c.steer_power(), 0.0);

        c.update(0.0, 0.0);
        assert_eq!(c.steer_power(), 0.0);
        assert_eq!(c.drive_power(), 0.0);
    }

    #[test]
    fn straight_back_flips_instead_of_steering() {
        let rig = Rig::new(0);
        let mut c = rig.controller();
        c.update(-1.0, 0.0);
        assert_eq!(c.direction(), Direction::Reverse);
        assert_eq!(c.steer_power(), 0.0);
        assert_eq!(c.drive_power(), -1.0);
    }

    #[test]
    fn already_aligned_keeps_direction() {
        let rig = Rig::new(0);
        let mut c = rig.controller();
        c.update(1.0, 0.0);
        assert_eq!(c.direction(), Direction::Forward);
        assert_eq!(c.steer_power(), 0.0);
        assert_eq!(c.drive_power(), 1.0);
    }

    #[test]
    fn quarter_turn_ccw_commands_negative_servo() {
        let rig = Rig::new(0);
        let mut c = rig.controller();
        // Target π/2, 0.3 rad short of it: keep direction, turn +0.3 ccw.
        let target = FRAC_PI_2;
        rig.count.set(((target - 0.3) / TAU * 8192.0) as i32);
        c.update(0.0, 0.8);
        assert_eq!(c.direction(), Direction::Forward);
        let report = c.report();
        assert!((report.turn - 0.3).abs() < 1e-3, "turn {}", report.turn);
        assert!((c.steer_power() + report.turn).abs() < 1e-6);
        assert!((c.drive_power() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn large_turn_is_clamped() {
        let rig = Rig::new(0);
        let mut c = rig.controller();
        // Wheel at 0, target 80°: turn > 1 rad, flip would be 100°.
        let a = 80f32.to_radians();
        c.update(libm::cosf(a), libm::sinf(a));
        assert_eq!(c.direction(), Direction::Forward);
        assert_eq!(c.steer_power(), -1.0);
    }

    #[test]
    fn reverse_offsets_heading_and_drive() {
        let rig = Rig::new(0);
        let mut c = rig.controller();
        c.update(-1.0, 0.0);
        assert_eq!(c.direction(), Direction::Reverse);
        assert!((c.heading() - PI).abs() < 1e-6);
        assert_eq!(c.wheel_angle(), 0.0);

        // Going forward again from reverse flips back.
        c.update(0.5, 0.0);
        assert_eq!(c.direction(), Direction::Forward);
        assert_eq!(c.drive_power(), 0.5);
    }

    #[test]
    fn encoder_wrap_is_absorbed() {
        let a = Rig::new(100);
        let b = Rig::new(100 + 8192 * 3);
        let c = Rig::new(100 - 8192 * 5);
        let ha = a.controller().heading();
        assert_eq!(ha, b.controller().heading());
        assert_eq!(ha, c.controller().heading());
    }

    #[test]
    fn go_is_idempotent_and_ganged_values_match() {
        let rig = Rig::new(0);
        let mut c = rig.controller();
        c.update(0.5, 0.0);
        c.go();
        c.go();
        assert_eq!(rig.drive.get(), 0.5);
        assert_eq!(rig.steer.get(), 0.0);

        let (_, drive, steer) = c.free();
        assert_eq!(drive.writes(), 2);
        assert_eq!(steer.writes(), 2);
    }

    #[test]
    fn report_formats_like_telemetry_line() {
        let rig = Rig::new(0);
        let mut c = rig.controller();
        c.update(-1.0, 0.0);
        let line = format!("{}", c.report());
        assert!(line.contains("direction: (reverse)"), "{line}");
        assert!(line.contains("drive: (-1.00)"), "{line}");
    }
}

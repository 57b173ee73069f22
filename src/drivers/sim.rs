// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Loopback hardware for running the controllers on a host.
//!
//! Each handle borrows a `Cell` owned by the caller, so a test or a simulation loop can move a
//! sensor or inspect an output while the controller holds the handle itself.

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};

use crate::motors::{Actuator, Encoder, PositionSensor};

/// Encoder whose count is whatever the backing cell holds.
#[derive(Clone, Copy)]
pub struct SimEncoder<'a> {
    count: &'a Cell<i32>,
}

impl<'a> SimEncoder<'a> {
    pub fn new(count: &'a Cell<i32>) -> Self {
        Self { count }
    }
}

impl Encoder for SimEncoder<'_> {
    #[inline]
    fn count(&self) -> i32 {
        self.count.get()
    }
}

/// Position sensor reading straight from the backing cell.
#[derive(Clone, Copy)]
pub struct SimPosition<'a> {
    position: &'a Cell<f32>,
}

impl<'a> SimPosition<'a> {
    pub fn new(position: &'a Cell<f32>) -> Self {
        Self { position }
    }
}

impl PositionSensor for SimPosition<'_> {
    #[inline]
    fn position(&self) -> f32 {
        self.position.get()
    }
}

/// Actuator that stores the last (clamped) command in the backing cell.
pub struct SimActuator<'a> {
    power: &'a Cell<f32>,
    writes: u32,
}

impl<'a> SimActuator<'a> {
    pub fn new(power: &'a Cell<f32>) -> Self {
        Self { power, writes: 0 }
    }

    /// Number of commands received so far.
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl Actuator for SimActuator<'_> {
    fn set_power(&mut self, power: f32) {
        self.power.set(power.clamp(-1.0, 1.0));
        self.writes = self.writes.wrapping_add(1);
    }
}

/// PWM channel recording its duty cycle, with a fixed resolution.
pub struct SimPwm<'a> {
    duty: &'a Cell<u16>,
    max: u16,
}

impl<'a> SimPwm<'a> {
    pub fn new(duty: &'a Cell<u16>, max: u16) -> Self {
        Self { duty, max }
    }
}

impl ErrorType for SimPwm<'_> {
    type Error = Infallible;
}

impl SetDutyCycle for SimPwm<'_> {
    fn max_duty_cycle(&self) -> u16 {
        self.max
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty.set(duty.min(self.max));
        Ok(())
    }
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Continuous-rotation servo on a 50 Hz PWM channel.
//!
//! The pulse width selects speed and direction instead of position:
//! - 1.5 ms: stopped
//! - 2.0 ms: full speed one way
//! - 1.0 ms: full speed the other way
//!
//! The steering axis of the swerve module and both sides of the lift are driven this way.

use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::config::ConfigError;
use crate::motors::Actuator;

/// Servo update rate in hertz. The PWM timer behind the channel must run at this frequency.
pub const PWM_FREQ_HZ: u32 = 50;

/// PWM period in microseconds.
const PERIOD_US: u32 = 1_000_000 / PWM_FREQ_HZ;

const DEFAULT_MIN_PULSE_US: u32 = 1000;
const DEFAULT_MAX_PULSE_US: u32 = 2000;

pub struct ContinuousServo<P> {
    chan: P,
    min_pulse_us: u32,
    max_pulse_us: u32,
    power: f32,
}

impl<P: SetDutyCycle> ContinuousServo<P> {
    /// Bind a servo to its channel and command it to stop.
    pub fn new(chan: P) -> Self {
        let mut servo = Self {
            chan,
            min_pulse_us: DEFAULT_MIN_PULSE_US,
            max_pulse_us: DEFAULT_MAX_PULSE_US,
            power: 0.0,
        };
        servo.apply(0.0);
        servo
    }

    /// Override the full-reverse / full-forward pulse widths for servos with a non-standard range.
    ///
    /// The range must be increasing and fit within one PWM period. To run a servo backwards wrap
    /// it in [`Reversed`](crate::motors::Reversed) instead of swapping the bounds.
    pub fn with_pulse_range(
        mut self,
        min_pulse_us: u32,
        max_pulse_us: u32,
    ) -> Result<Self, ConfigError> {
        if min_pulse_us >= max_pulse_us || max_pulse_us > PERIOD_US {
            return Err(ConfigError::InvalidPulseRange {
                min_us: min_pulse_us,
                max_us: max_pulse_us,
                period_us: PERIOD_US,
            });
        }
        self.min_pulse_us = min_pulse_us;
        self.max_pulse_us = max_pulse_us;
        self.apply(self.power);
        Ok(self)
    }

    /// Pulse width (µs) that the given power maps to.
    pub fn pulse_us(&self, power: f32) -> f32 {
        let power = power.clamp(-1.0, 1.0);
        let center = (self.min_pulse_us + self.max_pulse_us) as f32 * 0.5;
        let half_span = (self.max_pulse_us - self.min_pulse_us) as f32 * 0.5;
        center + power * half_span
    }

    /// Last commanded power after clamping.
    #[inline]
    pub fn power(&self) -> f32 {
        self.power
    }

    pub fn free(self) -> P {
        self.chan
    }

    fn apply(&mut self, power: f32) {
        self.power = power.clamp(-1.0, 1.0);
        let max = self.chan.max_duty_cycle() as f32;
        let duty = libm::roundf(self.pulse_us(self.power) * max / PERIOD_US as f32) as u16;
        if self.chan.set_duty_cycle(duty).is_err() {
            warn!("servo: PWM duty write failed");
        }
    }
}

impl<P: SetDutyCycle> Actuator for ContinuousServo<P> {
    #[inline]
    fn set_power(&mut self, power: f32) {
        self.apply(power);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::sim::SimPwm;
    use core::cell::Cell;

    // One duty step per microsecond.
    const MAX: u16 = PERIOD_US as u16;

    #[test]
    fn starts_at_neutral() {
        let duty = Cell::new(0);
        let _s = ContinuousServo::new(SimPwm::new(&duty, MAX));
        assert_eq!(duty.get(), 1500);
    }

    #[test]
    fn full_range() {
        let duty = Cell::new(0);
        let mut s = ContinuousServo::new(SimPwm::new(&duty, MAX));
        s.set_power(1.0);
        assert_eq!(duty.get(), 2000);
        s.set_power(-1.0);
        assert_eq!(duty.get(), 1000);
        s.set_power(-7.0);
        assert_eq!(duty.get(), 1000);
        assert_eq!(s.power(), -1.0);
    }

    #[test]
    fn custom_pulse_range() {
        let duty = Cell::new(0);
        let mut s = ContinuousServo::new(SimPwm::new(&duty, MAX)).with_pulse_range(500, 2500)
            .unwrap();
        assert_eq!(duty.get(), 1500);
        s.set_power(0.5);
        assert_eq!(duty.get(), 2000);
    }

    #[test]
    fn swapped_pulse_range_rejected() {
        let duty = Cell::new(0);
        let res = ContinuousServo::new(SimPwm::new(&duty, MAX)).with_pulse_range(2000, 1000);
        assert!(matches!(
            res,
            Err(ConfigError::InvalidPulseRange {
                min_us: 2000,
                max_us: 1000,
                period_us: PERIOD_US
            })
        ));
    }

    #[test]
    fn pulse_range_must_fit_period() {
        let duty = Cell::new(0);
        let s = ContinuousServo::new(SimPwm::new(&duty, MAX));
        assert!(s.with_pulse_range(1000, PERIOD_US + 1).is_err());

        let duty = Cell::new(0);
        let s = ContinuousServo::new(SimPwm::new(&duty, MAX));
        assert!(s.with_pulse_range(1500, 1500).is_err());

        let duty = Cell::new(0);
        let mut s = ContinuousServo::new(SimPwm::new(&duty, MAX))
            .with_pulse_range(0, PERIOD_US)
            .unwrap();
        s.set_power(1.0);
        assert_eq!(duty.get(), MAX);
    }
}

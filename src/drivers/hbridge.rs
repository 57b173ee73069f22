// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Brushed DC motor on a two-input H-bridge (IN1/IN2 PWM), e.g. the drive motors of a swerve
//! module.
//!
//! Wiring:
//! - IN1 PWM, IN2 low: forward
//! - IN1 low, IN2 PWM: reverse
//! - both high: brake (motor terminals shorted)

use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::motors::Actuator;

/// Commands with magnitude below this are treated as a stop.
const STOP_BAND: f32 = 0.001;

/// H-bridge motor driven by two hardware PWM channels.
pub struct HBridge<Pwm1, Pwm2> {
    in1: Pwm1,
    in2: Pwm2,
    current_power: f32,
}

impl<Pwm1, Pwm2> HBridge<Pwm1, Pwm2>
where
    Pwm1: SetDutyCycle,
    Pwm2: SetDutyCycle,
{
    /// Take both channels and leave the motor braked.
    pub fn new(in1: Pwm1, in2: Pwm2) -> Self {
        let mut bridge = Self {
            in1,
            in2,
            current_power: 0.0,
        };
        bridge.brake();
        bridge
    }

    /// Set the motor speed and direction.
    ///
    /// `power` - A float from -1.0 (full reverse) to 1.0 (full forward).
    pub fn set_speed(&mut self, power: f32) {
        let power = power.clamp(-1.0, 1.0);
        self.current_power = power;

        if power > STOP_BAND {
            let duty = scale(power, self.in1.max_duty_cycle());
            let r1 = self.in1.set_duty_cycle(duty);
            let r2 = self.in2.set_duty_cycle_fully_off();
            report(r1.is_ok() && r2.is_ok());
        } else if power < -STOP_BAND {
            let duty = scale(-power, self.in2.max_duty_cycle());
            let r1 = self.in1.set_duty_cycle_fully_off();
            let r2 = self.in2.set_duty_cycle(duty);
            report(r1.is_ok() && r2.is_ok());
        } else {
            self.brake();
        }
    }

    /// Brake (stops quickly by shorting motor terminals).
    pub fn brake(&mut self) {
        self.current_power = 0.0;
        let r1 = self.in1.set_duty_cycle_fully_on();
        let r2 = self.in2.set_duty_cycle_fully_on();
        report(r1.is_ok() && r2.is_ok());
    }

    /// Last commanded power after clamping.
    #[inline]
    pub fn power(&self) -> f32 {
        self.current_power
    }

    pub fn free(self) -> (Pwm1, Pwm2) {
        (self.in1, self.in2)
    }
}

impl<Pwm1, Pwm2> Actuator for HBridge<Pwm1, Pwm2>
where
    Pwm1: SetDutyCycle,
    Pwm2: SetDutyCycle,
{
    #[inline]
    fn set_power(&mut self, power: f32) {
        self.set_speed(power);
    }
}

#[inline]
fn scale(magnitude: f32, max_duty: u16) -> u16 {
    (magnitude * max_duty as f32) as u16
}

#[inline]
fn report(ok: bool) {
    if !ok {
        warn!("h-bridge: PWM duty write failed");
    }
}

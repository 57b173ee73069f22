// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Actuator Abstractions
//!
//! This module contains the small traits the controllers are written against, plus motor-level
//! wrappers that sit between them and the device-level drivers in `drivers`.
//!
//! A controller takes exclusive ownership of the handles it drives, so any two controllers never
//! touch the same motor or sensor.
//!
//! ## Modules
//!
//! - [`ganged`] - Several physical motors on one axis, and mirror-mounted motors.
//! - [`lift_motor`] - Encoder counts scaled into lift height units.

pub mod ganged;
pub mod lift_motor;

pub use ganged::{Ganged, Reversed};
pub use lift_motor::LiftEncoder;

/// Anything that accepts a normalized drive command.
pub trait Actuator {
    /// Command a power in `[-1.0, 1.0]`. Values outside are clamped by the implementation.
    fn set_power(&mut self, power: f32);
}

/// Incremental rotation sensor reporting a raw signed count.
pub trait Encoder {
    fn count(&self) -> i32;
}

/// Absolute position sensor in application units.
pub trait PositionSensor {
    fn position(&self) -> f32;
}

impl<T: Actuator + ?Sized> Actuator for &mut T {
    #[inline]
    fn set_power(&mut self, power: f32) {
        (**self).set_power(power)
    }
}

impl<T: Encoder + ?Sized> Encoder for &T {
    #[inline]
    fn count(&self) -> i32 {
        (**self).count()
    }
}

impl<T: PositionSensor + ?Sized> PositionSensor for &T {
    #[inline]
    fn position(&self) -> f32 {
        (**self).position()
    }
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-level drivers that sit above the HAL's PWM channels and below the
//! controllers. They are generic over `embedded-hal` traits, so they build and test on a host.
//!
//! ## Existing drivers
//!
//! - [`hbridge`] – brushed DC motor on a two-input H-bridge (swerve drive motors, rollers)
//! - [`cr_servo`] – continuous-rotation servo on a 50 Hz channel (steering, lift)
//! - [`sim`] – loopback sensors and actuators for host-side tests and simulation

pub mod cr_servo;
pub mod hbridge;
pub mod sim;

pub use cr_servo::ContinuousServo;
pub use hbridge::HBridge;

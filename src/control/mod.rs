// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! This module provides the closed-loop building blocks for the swerve modules and the lift.
//!
//! ## Modules
//!
//! - [`angle`] - Angle canonicalization and shortest signed turn.
//! - [`deadband`] - Dead-banded proportional law shared by the lift sides.
//! - [`steering_controller`] - Swerve module heading and drive polarity controller.
//! - [`lift_controller`] - Two-sided preset controller for the lift.

pub mod angle;
pub mod deadband;
pub mod lift_controller;
pub mod steering_controller;

pub use lift_controller::{LiftPositionController, LiftReport, LiftSide};
pub use steering_controller::{Direction, SteeringController, SteeringReport};

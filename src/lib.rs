// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Swerve Stilt Control
//!
//! This crate contains the control layer for a swerve-drive robot with a two-sided preset lift
//! ("stilts"), written in Rust. The core is `no_std`, allocation-free, and generic over
//! `embedded-hal` traits, so it runs on the STM32F777 board and on a host for tests and simulation.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`config`] | Calibration types and their validation |
//! | [`control`] | Control algorithms (angle math, swerve steering, lift presets) |
//! | [`motors`] | Actuator and sensor traits, ganged and reversed motors |
//! | [`drivers`] | Device-level drivers (H-bridge, continuous servo, simulated hardware) |
//! | [`robot`] | Operator input, components and the per-tick control cycle |
//! | `hw` | STM32F7 timer encoders and USART telemetry (`firmware` feature) |
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! Build with the MCU bindings:
//!
//! ```bash
//! cargo build --release --features firmware --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
pub mod motors;
pub mod robot;

#[cfg(feature = "firmware")]
pub mod hw;

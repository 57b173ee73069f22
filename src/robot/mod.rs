// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Robot Composition
//!
//! Ties the controllers to operator input and runs them in a fixed per-tick order.
//!
//! ## Modules
//!
//! - [`input`] - Per-cycle gamepad snapshot.
//! - [`component`] - The `Component` trait and its impls for the closed-loop controllers.
//! - [`bang_bang`] - Button-driven stacker and intake.
//! - [`cycle`] - `ControlCycle`, the update / output / report sequencer.

pub mod bang_bang;
pub mod component;
pub mod cycle;
pub mod input;

pub use bang_bang::{Intake, Stacker};
pub use component::Component;
pub use cycle::{ControlCycle, NullSink};
pub use input::OperatorInput;

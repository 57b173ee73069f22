// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed-order control cycle over a set of components.

use core::fmt;

use log::trace;

use super::component::Component;
use super::input::OperatorInput;

/// Steps every component through update, then output, then report.
///
/// All updates run before any output is written, so components never see each other's motors
/// half-commanded within a tick.
#[derive(Debug, Default)]
pub struct ControlCycle {
    ticks: u32,
}

impl ControlCycle {
    pub const fn new() -> Self {
        Self { ticks: 0 }
    }

    /// Run one tick. Each component writes one diagnostic line (`\r\n` terminated) to `out`.
    ///
    /// A failing `out` only stops the reports; motors have already been commanded by then.
    pub fn run(
        &mut self,
        input: &OperatorInput,
        components: &mut [&mut dyn Component],
        out: &mut dyn fmt::Write,
    ) -> fmt::Result {
        self.ticks = self.ticks.wrapping_add(1);
        trace!("cycle {}: {} components", self.ticks, components.len());

        for c in components.iter_mut() {
            c.update(input);
        }
        for c in components.iter_mut() {
            c.apply_outputs();
        }
        for c in components.iter() {
            c.report_state(out)?;
            out.write_str("\r\n")?;
        }
        Ok(())
    }

    /// Ticks run since construction.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

/// Discards everything written to it.
///
/// Use as the report sink when diagnostics are not wanted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl fmt::Write for NullSink {
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Ok(())
    }
}

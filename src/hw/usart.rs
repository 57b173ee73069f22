// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Blocking telemetry output over a USART.
//!
//! Component reports are plain text lines, so the port only needs `core::fmt::Write`. Hand it to
//! [`ControlCycle::run`](crate::robot::ControlCycle::run) as the report sink.
//!
//! To read it on the host, connect to the debug USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* <baud_rate>
//! ```

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

pub struct TelemetryPort<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> TelemetryPort<U> {
    /// Take the transmit half of `serial`. The receive half is dropped.
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    /// Block until the last byte has left the shift register.
    #[inline]
    pub fn flush(&mut self) {
        let _ = block!(self.tx.flush());
    }
}

impl<U: Instance> fmt::Write for TelemetryPort<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
        Ok(())
    }
}

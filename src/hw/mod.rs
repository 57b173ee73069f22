// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! STM32F7 peripheral bindings. Only built with the `firmware` feature.

pub mod encoder;
pub mod usart;

pub use encoder::TimerEncoder;
pub use usart::TelemetryPort;

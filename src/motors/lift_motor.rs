// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Lift height sensing built on top of an [`Encoder`].
//!
//! The lift preset table is written in whatever unit the encoder is scaled to. With the default
//! scale of `1.0` that is raw encoder counts, which is how the stock presets are calibrated.

use super::{Encoder, PositionSensor};
use crate::config::ConfigError;

/// Height sensor for one side of the lift.
///
/// Geometry parameters:
/// - `units_per_count`: lift travel per encoder count, in preset units
pub struct LiftEncoder<E> {
    encoder: E,
    units_per_count: f32,
}

impl<E: Encoder> LiftEncoder<E> {
    /// Report raw encoder counts as height.
    pub fn new(encoder: E) -> Self {
        Self {
            encoder,
            units_per_count: 1.0,
        }
    }

    /// Scale counts by `units_per_count` (e.g. millimeters of travel per count).
    ///
    /// The scale may be negative for an encoder that counts down as the lift rises, but must be
    /// nonzero and finite.
    pub fn with_scale(mut self, units_per_count: f32) -> Result<Self, ConfigError> {
        if !(units_per_count.is_finite() && units_per_count != 0.0) {
            return Err(ConfigError::InvalidEncoderScale {
                value: units_per_count,
            });
        }
        self.units_per_count = units_per_count;
        Ok(self)
    }

    /// Raw encoder counts.
    #[inline]
    pub fn counts(&self) -> i32 {
        self.encoder.count()
    }

    /// Convert a height in preset units into the encoder count that reads as it.
    pub fn counts_for_height(&self, height: f32) -> i32 {
        libm::roundf(height / self.units_per_count) as i32
    }

}

impl<E: Encoder> PositionSensor for LiftEncoder<E> {
    #[inline]
    fn position(&self) -> f32 {
        self.encoder.count() as f32 * self.units_per_count
    }
}

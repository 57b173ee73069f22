// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Calibration constants for the controllers.
//!
//! These are hardware-specific values (encoder resolution, per-side dead-bands and gains). They are
//! handed to the controller constructors, which reject nonsense up front so nothing can go wrong
//! per cycle. All types are `serde`-serializable so a calibration can come from a file on the host
//! or a frame on the debug link.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which side of the lift a value belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Rejected configuration, reported by the controller constructors.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("encoder counts per revolution must be nonzero")]
    ZeroCountsPerRev,
    #[error("{side} slowdown must be positive and finite, got {value}")]
    InvalidSlowdown { side: Side, value: f32 },
    #[error("{side} tolerance must be non-negative and finite, got {value}")]
    InvalidTolerance { side: Side, value: f32 },
    #[error("preset table is empty")]
    EmptyPresetTable,
    #[error("preset {index} has a non-finite target")]
    NonFinitePreset { index: usize },
    #[error("initial preset {index} is outside a table of {len}")]
    PresetIndexOutOfRange { index: usize, len: usize },
    #[error("servo pulse range {min_us}..{max_us} us must be increasing and fit in {period_us} us")]
    InvalidPulseRange {
        min_us: u32,
        max_us: u32,
        period_us: u32,
    },
    #[error("encoder scale must be nonzero and finite, got {value}")]
    InvalidEncoderScale { value: f32 },
}

/// Swerve module steering calibration.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    /// Encoder counts for one full revolution of the steering axis.
    pub counts_per_rev: u32,
}

impl SteeringConfig {
    /// Resolution of the through-bore encoder on the stock module.
    pub const DEFAULT_COUNTS_PER_REV: u32 = 8192;

    pub fn with_counts_per_rev(mut self, counts_per_rev: u32) -> Self {
        self.counts_per_rev = counts_per_rev;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.counts_per_rev == 0 {
            return Err(ConfigError::ZeroCountsPerRev);
        }
        Ok(())
    }
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            counts_per_rev: Self::DEFAULT_COUNTS_PER_REV,
        }
    }
}

/// Dead-band and proportional gain for one position axis.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisTuning {
    /// Errors smaller than this produce zero output.
    pub tolerance: f32,
    /// Error at which the output saturates to ±1, i.e. `1 / kp`.
    pub slowdown: f32,
}

impl AxisTuning {
    pub const fn new(tolerance: f32, slowdown: f32) -> Self {
        Self {
            tolerance,
            slowdown,
        }
    }

    pub fn validate(&self, side: Side) -> Result<(), ConfigError> {
        if !(self.slowdown.is_finite() && self.slowdown > 0.0) {
            return Err(ConfigError::InvalidSlowdown {
                side,
                value: self.slowdown,
            });
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(ConfigError::InvalidTolerance {
                side,
                value: self.tolerance,
            });
        }
        Ok(())
    }
}

/// Lift calibration, one tuning per side.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiftConfig {
    pub left: AxisTuning,
    pub right: AxisTuning,
}

impl LiftConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.left.validate(Side::Left)?;
        self.right.validate(Side::Right)
    }

    /// Tuning for the given side.
    pub fn side(&self, side: Side) -> &AxisTuning {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            left: AxisTuning::new(50.0, 500.0),
            right: AxisTuning::new(100.0, 300.0),
        }
    }
}

/// One discrete lift position: a target for each side, in sensor units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub left: f32,
    pub right: f32,
}

impl Preset {
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Target for the given side.
    #[inline]
    pub fn target(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn is_finite(&self) -> bool {
        self.left.is_finite() && self.right.is_finite()
    }
}

/// Stock stilt positions in raw encoder counts. Index 0 is fully retracted.
pub const STILT_PRESETS: [Preset; 6] = [
    Preset::new(0.0, 0.0),
    Preset::new(0.0, -600.0),
    Preset::new(-13000.0, 2700.0),
    Preset::new(-13000.0, 950.0),
    Preset::new(-7000.0, 950.0),
    Preset::new(-12000.0, 950.0),
];

/// Check a preset table and a starting index against it.
pub fn validate_presets(presets: &[Preset], initial: usize) -> Result<(), ConfigError> {
    if presets.is_empty() {
        return Err(ConfigError::EmptyPresetTable);
    }
    if let Some(index) = presets.iter().position(|p| !p.is_finite()) {
        return Err(ConfigError::NonFinitePreset { index });
    }
    if initial >= presets.len() {
        return Err(ConfigError::PresetIndexOutOfRange {
            index: initial,
            len: presets.len(),
        });
    }
    Ok(())
}

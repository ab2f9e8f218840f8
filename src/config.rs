use serde::{Deserialize, Serialize};

use crate::errors::{Result, SliderError};
use crate::state::SliderValue;

/// Whether committed values glide freely or snap to step multiples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SliderMode {
    #[default]
    Continuous,
    Discrete,
}

/// Rendered handle diameter. The two supported sizes match the original
/// design spec (24 px and 32 px handles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HandleSize {
    Small,
    #[default]
    Large,
}

impl HandleSize {
    pub fn diameter(self) -> f32 {
        match self {
            HandleSize::Small => 24.0,
            HandleSize::Large => 32.0,
        }
    }

    /// Half the handle width, used to center the handle on its track point.
    pub fn radius(self) -> f32 {
        self.diameter() / 2.0
    }
}

/// Resolved slider parameters.
///
/// Build one with [`SliderConfig::single`] or [`SliderConfig::range`] and the
/// builder methods, then hand it to [`crate::SliderState::new`], which
/// validates it. The arity (single value vs range pair) is carried by the
/// `initial` variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub mode: SliderMode,
    pub initial: SliderValue,
    pub handle_size: HandleSize,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 20.0,
            step: 1.0,
            mode: SliderMode::Continuous,
            initial: SliderValue::Single(0.0),
            handle_size: HandleSize::Large,
        }
    }
}

impl SliderConfig {
    /// Single-value slider over `[min, max]`, starting at `min`.
    pub fn single(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            initial: SliderValue::Single(min),
            ..Self::default()
        }
    }

    /// Range slider over `[min, max]`, starting fully open at `(min, max)`.
    pub fn range(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            initial: SliderValue::Range(min, max),
            ..Self::default()
        }
    }

    /// Snap committed values to multiples of `step` offset from `min`.
    pub fn discrete(mut self, step: f32) -> Self {
        self.mode = SliderMode::Discrete;
        self.step = step;
        self
    }

    pub fn continuous(mut self) -> Self {
        self.mode = SliderMode::Continuous;
        self
    }

    pub fn initial_value(mut self, value: f32) -> Self {
        self.initial = SliderValue::Single(value);
        self
    }

    pub fn initial_range(mut self, lower: f32, upper: f32) -> Self {
        self.initial = SliderValue::Range(lower, upper);
        self
    }

    pub fn handle_size(mut self, size: HandleSize) -> Self {
        self.handle_size = size;
        self
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Round `raw` to the nearest step multiple offset from `min`, kept
    /// inside the bounds even when the span is not evenly divisible.
    pub fn snap(&self, raw: f32) -> f32 {
        let steps = ((raw - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Check every construction-time invariant. Pure; no side effects.
    pub fn validate(&self) -> Result<()> {
        if self.min >= self.max {
            return Err(SliderError::BoundsOutOfOrder {
                min: self.min,
                max: self.max,
            });
        }
        if self.mode == SliderMode::Discrete && self.step <= 0.0 {
            return Err(SliderError::StepNotPositive { step: self.step });
        }
        match self.initial {
            SliderValue::Single(value) => self.check_in_bounds(value)?,
            SliderValue::Range(lower, upper) => {
                if lower > upper {
                    return Err(SliderError::RangeOutOfOrder { lower, upper });
                }
                self.check_in_bounds(lower)?;
                self.check_in_bounds(upper)?;
            }
        }
        Ok(())
    }

    fn check_in_bounds(&self, value: f32) -> Result<()> {
        if value < self.min || value > self.max {
            return Err(SliderError::InitialOutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

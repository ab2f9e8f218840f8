use thiserror::Error;

/// Configuration errors reported when a slider is constructed.
///
/// Every variant is detected up front by [`crate::SliderConfig::validate`];
/// once a slider has been built there are no fatal runtime errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliderError {
    #[error("slider bounds out of order: min {min} must be less than max {max}")]
    BoundsOutOfOrder { min: f32, max: f32 },

    #[error("discrete slider step must be positive, got {step}")]
    StepNotPositive { step: f32 },

    #[error("initial value {value} lies outside [{min}, {max}]")]
    InitialOutOfRange { value: f32, min: f32, max: f32 },

    #[error("initial range is inverted: lower {lower} exceeds upper {upper}")]
    RangeOutOfOrder { lower: f32, upper: f32 },
}

pub type Result<T> = std::result::Result<T, SliderError>;

impl SliderError {
    /// Stable identifier for logging and host-side error reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            SliderError::BoundsOutOfOrder { .. } => "BOUNDS_OUT_OF_ORDER",
            SliderError::StepNotPositive { .. } => "STEP_NOT_POSITIVE",
            SliderError::InitialOutOfRange { .. } => "INITIAL_OUT_OF_RANGE",
            SliderError::RangeOutOfOrder { .. } => "RANGE_OUT_OF_ORDER",
        }
    }
}

//! rSlider - a hand-painted single/range slider widget for egui.
//!
//! The crate is split along the same seams as the widget itself:
//! [`config`] resolves and validates parameters, [`state`] is the
//! pointer-drag state machine that owns the committed value, and
//! [`projection`] turns committed values into track/handle/tooltip
//! placement. [`widget::Slider`] glues the three to egui.

pub mod config;
pub mod errors;
pub mod logging;
pub mod projection;
pub mod state;
pub mod widget;


pub use config::{HandleSize, SliderConfig, SliderMode};
pub use errors::{Result, SliderError};
pub use state::{DragState, Handle, SliderState, SliderValue, TrackGeometry};
pub use widget::Slider;

//! Pure view math: committed value + configuration in, percentages and
//! pixel offsets out. Nothing here holds state, so the rendered view can
//! never go stale relative to the state machine.

use crate::config::HandleSize;
use crate::state::SliderValue;

/// Half the tooltip label width; tooltips are shifted left by this much so
/// the label is centered under its handle.
pub const TOOLTIP_HALF_WIDTH: f32 = 25.0;

/// Percent position of `value` along the track.
pub fn position(value: f32, min: f32, max: f32) -> f32 {
    (value - min) / (max - min) * 100.0
}

/// One horizontal stretch of the track, in percent of its width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillSegment {
    pub start_pct: f32,
    pub end_pct: f32,
    pub filled: bool,
}

/// Split the track into filled/neutral segments: two for a single value
/// (filled up to the handle), three for a range (filled between handles).
pub fn track_segments(value: SliderValue, min: f32, max: f32) -> Vec<FillSegment> {
    match value {
        SliderValue::Single(v) => {
            let p = position(v, min, max);
            vec![segment(0.0, p, true), segment(p, 100.0, false)]
        }
        SliderValue::Range(lower, upper) => {
            let lo = position(lower, min, max);
            let hi = position(upper, min, max);
            vec![
                segment(0.0, lo, false),
                segment(lo, hi, true),
                segment(hi, 100.0, false),
            ]
        }
    }
}

fn segment(start_pct: f32, end_pct: f32, filled: bool) -> FillSegment {
    FillSegment {
        start_pct,
        end_pct,
        filled,
    }
}

/// Left edge of a handle in pixels from the track's left edge, such that
/// the handle is centered on its percent point rather than left-aligned.
pub fn handle_left_px(percent: f32, track_width: f32, size: HandleSize) -> f32 {
    percent / 100.0 * track_width - size.radius()
}

/// Left edge of a tooltip label in pixels from the track's left edge.
pub fn tooltip_left_px(percent: f32, track_width: f32) -> f32 {
    percent / 100.0 * track_width - TOOLTIP_HALF_WIDTH
}

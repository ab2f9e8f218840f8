use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{SliderConfig, SliderMode};
use crate::errors::Result;

/// Committed slider value: a single scalar or an ordered `(lower, upper)`
/// pair. For the pair, `lower <= upper` holds after every event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SliderValue {
    Single(f32),
    Range(f32, f32),
}

impl SliderValue {
    pub fn as_single(&self) -> Option<f32> {
        match *self {
            SliderValue::Single(value) => Some(value),
            SliderValue::Range(..) => None,
        }
    }

    pub fn as_range(&self) -> Option<(f32, f32)> {
        match *self {
            SliderValue::Single(_) => None,
            SliderValue::Range(lower, upper) => Some((lower, upper)),
        }
    }
}

impl fmt::Display for SliderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SliderValue::Single(value) => write!(f, "{value:.2}"),
            SliderValue::Range(lower, upper) => write!(f, "[{lower:.2}, {upper:.2}]"),
        }
    }
}

/// Which handle a pointer interaction addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Single,
    Lower,
    Upper,
}

/// Drag session lifecycle. At most one handle drags at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Handle),
}

/// Track bounds in the same coordinate space as pointer positions,
/// queried from the host on every move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub left: f32,
    pub width: f32,
}

/// The slider's interaction state machine.
///
/// Owns the committed value and the transient drag session. Host-agnostic:
/// the egui widget in [`crate::widget`] feeds pointer events in, but the
/// transitions here can be driven (and tested) without any UI at all.
#[derive(Debug, Clone)]
pub struct SliderState {
    config: SliderConfig,
    value: SliderValue,
    drag: DragState,
}

impl SliderState {
    /// Validates the configuration; an invalid one never becomes a slider.
    pub fn new(config: SliderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            value: config.initial,
            config,
            drag: DragState::Idle,
        })
    }

    /// Replace the configuration and committed value wholesale. This is the
    /// only way the committed value changes outside of a drag.
    pub fn reset(&mut self, config: SliderConfig) -> Result<()> {
        config.validate()?;
        self.value = config.initial;
        self.config = config;
        self.drag = DragState::Idle;
        Ok(())
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn value(&self) -> SliderValue {
        self.value
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragState::Idle
    }

    /// Begin a drag session. Only meaningful from `Idle`, and only for a
    /// handle that matches the value arity; anything else is ignored.
    /// Returns whether a session actually started.
    pub fn pointer_down(&mut self, handle: Handle) -> bool {
        if self.drag != DragState::Idle {
            return false;
        }
        let compatible = matches!(
            (self.value, handle),
            (SliderValue::Single(_), Handle::Single)
                | (SliderValue::Range(..), Handle::Lower | Handle::Upper)
        );
        if !compatible {
            return false;
        }
        debug!("slider drag started on {handle:?}");
        self.drag = DragState::Dragging(handle);
        true
    }

    /// Recompute the committed value for a pointer position.
    ///
    /// Returns the new value only when a commit was accepted and actually
    /// changed something; callers fire their change notification off that.
    /// Moves while idle, moves without usable track geometry, and moves
    /// that would drag a range handle past its sibling all return `None`
    /// and leave the committed value untouched. A rejected move does not
    /// end the session; the next move is evaluated independently.
    pub fn pointer_move(
        &mut self,
        pointer_x: f32,
        track: Option<TrackGeometry>,
    ) -> Option<SliderValue> {
        let DragState::Dragging(handle) = self.drag else {
            return None;
        };
        let track = track?;
        if track.width <= 0.0 {
            return None;
        }

        let percent = ((pointer_x - track.left) / track.width * 100.0).clamp(0.0, 100.0);
        let raw = self.config.min + percent / 100.0 * self.config.span();
        let candidate = match self.config.mode {
            SliderMode::Discrete => self.config.snap(raw),
            SliderMode::Continuous => raw,
        };

        // The hard stop at the sibling handle keeps `lower <= upper` without
        // ever reordering handles; equality is a valid commit, so a range
        // may collapse to a point.
        let committed = match (self.value, handle) {
            (SliderValue::Single(_), Handle::Single) => SliderValue::Single(candidate),
            (SliderValue::Range(_, upper), Handle::Lower) if candidate <= upper => {
                SliderValue::Range(candidate, upper)
            }
            (SliderValue::Range(lower, _), Handle::Upper) if candidate >= lower => {
                SliderValue::Range(lower, candidate)
            }
            _ => return None,
        };

        if committed == self.value {
            return None;
        }
        self.value = committed;
        Some(committed)
    }

    /// End the drag session. Safe to call in any state.
    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            debug!("slider drag ended at {}", self.value);
        }
        self.drag = DragState::Idle;
    }
}

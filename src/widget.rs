use egui::{self, Color32, CornerRadius, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::projection;
use crate::state::{Handle, SliderState, SliderValue, TrackGeometry};

// Track and handle palette carried over from the original design spec
const TRACK_NEUTRAL: Color32 = Color32::from_rgb(221, 221, 221);
const TRACK_FILL: Color32 = Color32::from_rgb(76, 175, 80);
const HANDLE_FILL: Color32 = Color32::WHITE;
const HANDLE_BORDER: Color32 = Color32::from_rgb(160, 160, 160);
const TOOLTIP_TEXT: Color32 = Color32::from_rgb(180, 180, 180);

const TRACK_HEIGHT: f32 = 6.0;
const TOOLTIP_LANE: f32 = 18.0;

/// One-frame view of a [`SliderState`]: feeds this frame's pointer events
/// into the state machine, then paints the committed result.
///
/// The state lives in the host app and survives across frames; the widget
/// is rebuilt every frame, egui-style:
///
/// ```ignore
/// ui.add(Slider::new(&mut self.volume).width(320.0).on_change(|v| {
///     log::info!("volume now {v}");
/// }));
/// ```
pub struct Slider<'a> {
    state: &'a mut SliderState,
    width: Option<f32>,
    show_tooltip: bool,
    on_change: Option<Box<dyn FnMut(SliderValue) + 'a>>,
}

impl<'a> Slider<'a> {
    pub fn new(state: &'a mut SliderState) -> Self {
        Self {
            state,
            width: None,
            show_tooltip: true,
            on_change: None,
        }
    }

    /// Fixed track width in points; defaults to the available width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn show_tooltip(mut self, show: bool) -> Self {
        self.show_tooltip = show;
        self
    }

    /// Called synchronously on every accepted commit that changed the
    /// value; never on rejected moves and never with the initial value.
    pub fn on_change(mut self, callback: impl FnMut(SliderValue) + 'a) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn show(mut self, ui: &mut egui::Ui) -> egui::Response {
        let diameter = self.state.config().handle_size.diameter();
        let width = self.width.unwrap_or_else(|| ui.available_width());
        let height = diameter + if self.show_tooltip { TOOLTIP_LANE } else { 0.0 };
        let (rect, mut response) =
            ui.allocate_exact_size(Vec2::new(width, height), Sense::click_and_drag());

        let lane_center_y = rect.top() + diameter / 2.0;
        let track = TrackGeometry {
            left: rect.left(),
            width: rect.width(),
        };

        // Interaction first, so this frame already paints the new commit.
        // egui's pointer capture keeps move/up delivery alive while the
        // pointer is outside the rect and releases it on drag_stopped.
        // The press frame only arms the session; the value moves with the
        // first actual pointer move, so a bare click never nudges a handle.
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(handle) = self.hit_handle(pos, rect, lane_center_y) {
                    self.state.pointer_down(handle);
                }
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(committed) = self.state.pointer_move(pos.x, Some(track)) {
                    if let Some(callback) = self.on_change.as_mut() {
                        callback(committed);
                    }
                    response.mark_changed();
                }
            }
        }
        if response.drag_stopped() {
            self.state.pointer_up();
        }

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, lane_center_y);
        }
        response
    }

    fn handle_center(&self, percent: f32, rect: Rect, center_y: f32) -> Pos2 {
        let size = self.state.config().handle_size;
        let left = rect.left() + projection::handle_left_px(percent, rect.width(), size);
        Pos2::new(left + size.radius(), center_y)
    }

    /// Hit-test a press against the handle circles. Only a press on a
    /// handle starts a drag; the bare track is inert. The upper handle is
    /// painted on top, so it wins when a collapsed range stacks them.
    fn hit_handle(&self, pos: Pos2, rect: Rect, center_y: f32) -> Option<Handle> {
        let config = self.state.config();
        let radius = config.handle_size.radius();
        let hits = |value: f32| {
            let percent = projection::position(value, config.min, config.max);
            self.handle_center(percent, rect, center_y).distance(pos) <= radius
        };
        match self.state.value() {
            SliderValue::Single(value) => hits(value).then_some(Handle::Single),
            SliderValue::Range(lower, upper) => {
                if hits(upper) {
                    Some(Handle::Upper)
                } else {
                    hits(lower).then_some(Handle::Lower)
                }
            }
        }
    }

    fn paint(&self, ui: &egui::Ui, rect: Rect, lane_center_y: f32) {
        let painter = ui.painter();
        let config = self.state.config();
        let value = self.state.value();

        for seg in projection::track_segments(value, config.min, config.max) {
            let seg_rect = Rect::from_min_max(
                Pos2::new(
                    rect.left() + seg.start_pct / 100.0 * rect.width(),
                    lane_center_y - TRACK_HEIGHT / 2.0,
                ),
                Pos2::new(
                    rect.left() + seg.end_pct / 100.0 * rect.width(),
                    lane_center_y + TRACK_HEIGHT / 2.0,
                ),
            );
            let color = if seg.filled { TRACK_FILL } else { TRACK_NEUTRAL };
            painter.rect_filled(seg_rect, CornerRadius::same(3), color);
        }

        let draw_handle = |handle_value: f32| {
            let percent = projection::position(handle_value, config.min, config.max);
            let center = self.handle_center(percent, rect, lane_center_y);
            let radius = config.handle_size.radius();
            painter.circle_filled(center, radius, HANDLE_FILL);
            painter.circle_stroke(center, radius, Stroke::new(1.0, HANDLE_BORDER));
            painter.circle_filled(center, radius * 0.28, TRACK_FILL);
        };
        let draw_tooltip = |handle_value: f32| {
            let percent = projection::position(handle_value, config.min, config.max);
            let left = rect.left() + projection::tooltip_left_px(percent, rect.width());
            let anchor = Pos2::new(
                left + projection::TOOLTIP_HALF_WIDTH,
                rect.top() + config.handle_size.diameter() + TOOLTIP_LANE / 2.0,
            );
            let label = if config.span() > 10.0 {
                format!("{handle_value:.0}")
            } else {
                format!("{handle_value:.2}")
            };
            painter.text(
                anchor,
                egui::Align2::CENTER_CENTER,
                label,
                FontId::proportional(10.0),
                TOOLTIP_TEXT,
            );
        };

        // Lower first so a collapsed range shows the upper handle on top,
        // matching the hit-test order.
        match value {
            SliderValue::Single(v) => {
                draw_handle(v);
                if self.show_tooltip {
                    draw_tooltip(v);
                }
            }
            SliderValue::Range(lower, upper) => {
                draw_handle(lower);
                draw_handle(upper);
                if self.show_tooltip {
                    draw_tooltip(lower);
                    draw_tooltip(upper);
                }
            }
        }
    }
}

impl egui::Widget for Slider<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        self.show(ui)
    }
}

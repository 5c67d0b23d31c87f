//! Horizontal channel slider with integer steps.
//!
//! The track spans integer positions 0..=max_int (0–255 for every channel
//! in the panel). Pressing or dragging snaps the pointer to the nearest
//! integer position and commits it immediately; the slider path never
//! goes through the text buffers.

use floem::kurbo::Rect;
use floem::peniko::Color;
use floem::reactive::create_effect;
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;

pub struct ChannelSlider {
    id: ViewId,
    held: bool,
    /// Normalized 0.0–1.0 value mirrored from the owning channel.
    value: f64,
    max_int: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64)>>,
}

/// Creates a horizontal slider for one channel.
///
/// - `value`: read reactively, 0.0–1.0; the thumb sits at `value * max_int`.
/// - `on_change`: called with `position / max_int` on every pointer press
///   and drag movement.
pub(crate) fn channel_slider(
    value: impl Fn() -> f64 + 'static,
    max_int: f64,
    on_change: impl Fn(f64) + 'static,
) -> ChannelSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let v = value();
        id.update_state(v);
    });

    ChannelSlider {
        id,
        held: false,
        value: 0.0,
        max_int,
        size: Default::default(),
        on_change: Some(Box::new(on_change)),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

/// Snap a pointer x offset to the nearest integer position on the track.
fn pointer_position(x: f64, width: f64, max_int: f64) -> f64 {
    let r = constants::THUMB_RADIUS;
    let usable = width - 2.0 * r;
    if usable <= 0.0 {
        return 0.0;
    }
    (((x - r) / usable).clamp(0.0, 1.0) * max_int).round()
}

impl ChannelSlider {
    fn commit_from_pointer(&mut self, x: f64) {
        let position = pointer_position(x, self.size.width as f64, self.max_int);
        self.value = position / self.max_int;
        if let Some(cb) = &self.on_change {
            cb(self.value);
        }
    }
}

impl View for ChannelSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(value) = state.downcast::<f64>() {
            self.value = *value;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.commit_from_pointer(e.pos.x);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.commit_from_pointer(e.pos.x);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.held = false;
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        let radius = constants::THUMB_RADIUS;
        // Out-of-range values can be committed through the float box; the
        // thumb just pins to the nearest end of the track.
        let thumb_x = radius + self.value.clamp(0.0, 1.0) * (w - 2.0 * radius);
        let thumb_cy = h / 2.0;

        // Track with the filled span up to the thumb
        cx.save();
        cx.clip(&rrect);
        cx.fill(&rect, Color::rgb8(228, 228, 228), 0.0);
        let filled = Rect::new(0.0, 0.0, thumb_x, h);
        cx.fill(&filled, Color::rgb8(170, 170, 170), 0.0);
        cx.restore();

        // Slider outline
        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb (circular ring)
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let innermost = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 3.0);
        cx.stroke(
            &innermost,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}

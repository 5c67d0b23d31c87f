//! Input components: the channel row, hex editing, and the copy button.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};

use crate::channel_slider::channel_slider;
use crate::color::RgbColor;
use crate::constants;
use crate::reconcile::ChannelBuffers;

/// One channel row: label, slider, integer box, float box.
///
/// `value` reads the authoritative channel (0.0–1.0). The slider commits
/// through `on_change` on every movement; the two text boxes commit on
/// Enter or focus loss via their reconciliation buffers.
pub(crate) fn channel_row(
    lbl: &'static str,
    value: impl Fn() -> f64 + Clone + 'static,
    max_int: f64,
    on_change: impl Fn(f64) + Clone + 'static,
) -> impl IntoView {
    let buffers = ChannelBuffers::new();

    // Authoritative value → buffers, on transitions only. While the value
    // holds still, the buffers belong to whatever the user is typing.
    {
        let value = value.clone();
        create_effect(move |prev: Option<f64>| {
            let v = value();
            match prev {
                Some(prev) if prev == v => {}
                _ => buffers.resync(v, max_int),
            }
            v
        });
    }

    let commit_int = {
        let on_change = on_change.clone();
        move || {
            if let Some(v) = buffers.commit_int(max_int) {
                on_change(v);
            }
        }
    };
    let commit_float = {
        let on_change = on_change.clone();
        move || {
            if let Some(v) = buffers.commit_float() {
                on_change(v);
            }
        }
    };

    h_stack((
        label(move || lbl).style(|s| {
            s.width(constants::LABEL_WIDTH)
                .font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
        channel_slider(value, max_int, on_change).style(|s| s.flex_grow(1.0)),
        commit_input(buffers.int_text(), constants::INT_INPUT_WIDTH, commit_int),
        commit_input(
            buffers.float_text(),
            constants::FLOAT_INPUT_WIDTH,
            commit_float,
        ),
    ))
    .style(|s| s.items_center().gap(constants::GAP / 2.0))
}

/// A text box that commits on Enter or focus loss.
///
/// Typing only edits the buffer. The commit callback re-reads the buffer;
/// text that fails to parse there is dropped and stays on screen.
fn commit_input(
    text: RwSignal<String>,
    width: f32,
    on_commit: impl Fn() + Clone + 'static,
) -> impl IntoView {
    let on_commit_enter = on_commit.clone();
    text_input(text)
        .style(move |s| {
            s.width(width)
                .padding(2.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(3.0)
        })
        .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
            on_commit();
        })
        .on_event(floem::event::EventListener::KeyDown, move |e| {
            if let floem::event::Event::KeyDown(ke) = e {
                if ke.key.logical_key
                    == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                {
                    on_commit_enter();
                    return EventPropagation::Stop;
                }
            }
            EventPropagation::Continue
        })
}

/// Hex row: shows the derived color as RRGGBB and accepts 3- or 6-digit
/// edits (leading `#` allowed), committed on Enter or focus loss.
pub(crate) fn hex_input(
    value: impl Fn() -> RgbColor + 'static,
    on_change: impl Fn(RgbColor) + Clone + 'static,
) -> impl IntoView {
    let text = RwSignal::new(String::new());

    create_effect(move |prev: Option<String>| {
        let hex = value().to_hex();
        if prev.as_deref() != Some(hex.as_str()) {
            text.set(hex.clone());
        }
        hex
    });

    let commit = move || {
        if let Some(c) = RgbColor::from_hex(&text.get_untracked()) {
            on_change(c);
        }
    };

    h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        commit_input(text, constants::HEX_INPUT_WIDTH, commit),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}

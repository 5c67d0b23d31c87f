//! The panel: one authoritative HSV value, six channel rows, preview
//! swatch, and hex row.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::color::{HsvColor, RgbColor};
use crate::constants;
use crate::inputs::{channel_row, copy_button, hex_input};

/// Scale a derived channel for the preview swatch.
///
/// The swatch scales by 256, not 255; the saturating cast keeps a
/// full-intensity channel at 255.
fn swatch_channel(x: f64) -> u8 {
    (x * 256.0) as u8
}

/// Creates the panel view.
///
/// HSV is the only stored color and is replaced whole on every commit.
/// RGB is derived from it on demand; keeping an independent RGB copy lets
/// repeated slider edits drift the two representations apart, because the
/// float round trip through the inverse conversion is not exact.
pub(crate) fn color_panel() -> impl IntoView {
    let color = RwSignal::new(HsvColor::default());

    let on_change_h = move |v: f64| color.set(color.get_untracked().with_hue(v));
    let on_change_s = move |v: f64| color.set(color.get_untracked().with_saturation(v));
    let on_change_v = move |v: f64| color.set(color.get_untracked().with_value(v));

    // An RGB edit derives the current triple, replaces the one channel,
    // and converts straight back. The triple never outlives the handler.
    let on_change_r = move |v: f64| {
        let rgb = color.get_untracked().to_rgb();
        color.set(rgb.with_red(v).to_hsv());
    };
    let on_change_g = move |v: f64| {
        let rgb = color.get_untracked().to_rgb();
        color.set(rgb.with_green(v).to_hsv());
    };
    let on_change_b = move |v: f64| {
        let rgb = color.get_untracked().to_rgb();
        color.set(rgb.with_blue(v).to_hsv());
    };

    v_stack((
        // Live preview swatch
        empty().style(move |s| {
            let rgb = color.get().to_rgb();
            s.height(constants::SWATCH_HEIGHT)
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(Color::rgb8(
                    swatch_channel(rgb.r()),
                    swatch_channel(rgb.g()),
                    swatch_channel(rgb.b()),
                ))
        }),
        // RGB rows (values derived from the stored HSV)
        v_stack((
            channel_row(
                "Red",
                move || color.get().to_rgb().r(),
                constants::CHANNEL_MAX,
                on_change_r,
            ),
            channel_row(
                "Green",
                move || color.get().to_rgb().g(),
                constants::CHANNEL_MAX,
                on_change_g,
            ),
            channel_row(
                "Blue",
                move || color.get().to_rgb().b(),
                constants::CHANNEL_MAX,
                on_change_b,
            ),
        ))
        .style(|s| s.gap(constants::GAP / 2.0)),
        // Rule between the two groups
        empty().style(|s| s.height(1.0).background(Color::rgb8(200, 200, 200))),
        // HSV rows (direct reads of the stored value)
        v_stack((
            channel_row(
                "Hue",
                move || color.get().h(),
                constants::CHANNEL_MAX,
                on_change_h,
            ),
            channel_row(
                "Sat.",
                move || color.get().s(),
                constants::CHANNEL_MAX,
                on_change_s,
            ),
            channel_row(
                "Value",
                move || color.get().v(),
                constants::CHANNEL_MAX,
                on_change_v,
            ),
        ))
        .style(|s| s.gap(constants::GAP / 2.0)),
        // Hex + copy row
        h_stack((
            hex_input(
                move || color.get().to_rgb(),
                move |rgb: RgbColor| color.set(rgb.to_hsv()),
            ),
            copy_button(move || color.get_untracked().to_rgb().to_hex()),
        ))
        .style(|s| s.gap(constants::GAP).items_center().justify_center()),
    ))
    .style(|s| {
        s.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .background(Color::rgb8(242, 242, 242))
    })
}

#[cfg(test)]
mod tests {
    use super::swatch_channel;

    #[test]
    fn swatch_scale_saturates_at_full_intensity() {
        assert_eq!(swatch_channel(0.0), 0);
        assert_eq!(swatch_channel(0.5), 128);
        // 1.0 * 256 would escape the 0–255 range; the cast pins it.
        assert_eq!(swatch_channel(1.0), 255);
    }

    #[test]
    fn swatch_scale_is_256_not_255() {
        // 0.25 lands on 64 under the 256 scale, 63 under a 255 scale.
        assert_eq!(swatch_channel(0.25), 64);
    }
}

//! # floem-hsv-panel
//!
//! A linked RGB/HSV slider panel widget for [Floem](https://github.com/lapce/floem).
//!
//! Shows a single color through six channel rows (Red, Green, Blue and
//! Hue, Sat., Value), each backed by a slider, an integer box, and a float
//! box, plus a live preview swatch and hex editing. The panel stores only
//! the HSV value; the RGB side is derived from it for every render, so the
//! two representations cannot drift apart under repeated edits.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem_hsv_panel::hsv_panel;
//!
//! // Use `hsv_panel()` in your Floem view tree.
//! let view = hsv_panel();
//! ```

mod channel_slider;
mod color;
mod constants;
mod inputs;
mod math;
mod panel;
mod reconcile;

pub use color::{HsvColor, RgbColor};

use std::sync::Once;

use floem::prelude::*;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the panel view.
///
/// The panel owns its color: it mounts black and the value lives for the
/// lifetime of the view. Every control edit routes back into that one
/// value synchronously.
pub fn hsv_panel() -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    panel::color_panel()
}

//! Sizing, color, and styling constants for the panel.

/// Integer range shared by every channel slider and integer box.
pub const CHANNEL_MAX: f64 = 255.0;

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Thumb radius on sliders
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for the swatch and input fields
pub const RADIUS: f32 = 4.0;

/// Gap between panel elements
pub const GAP: f32 = 8.0;

/// Padding around the whole panel
pub const PADDING: f32 = 8.0;

/// Channel label column width
pub const LABEL_WIDTH: f32 = 44.0;

/// Integer input field width
pub const INT_INPUT_WIDTH: f32 = 36.0;

/// Float input field width
pub const FLOAT_INPUT_WIDTH: f32 = 72.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Preview swatch height
pub const SWATCH_HEIGHT: f32 = 48.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

//! RgbColor and HsvColor — the public color representations for the panel.
//!
//! Both store their channels as f64 values in the 0.0–1.0 range. The HSV
//! form is the one the panel holds on to; the RGB form is derived from it
//! whenever something needs to be displayed or edited channel-wise.

use crate::math;

/// RGB color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbColor {
    r: f64,
    g: f64,
    b: f64,
}

impl RgbColor {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Copy with the red channel replaced.
    pub fn with_red(self, r: f64) -> Self {
        Self { r, ..self }
    }

    /// Copy with the green channel replaced.
    pub fn with_green(self, g: f64) -> Self {
        Self { g, ..self }
    }

    /// Copy with the blue channel replaced.
    pub fn with_blue(self, b: f64) -> Self {
        Self { b, ..self }
    }

    /// Convert to HSV.
    pub fn to_hsv(self) -> HsvColor {
        let (h, s, v) = math::rgb_to_hsv(self.r, self.g, self.b);
        HsvColor { h, s, v }
    }

    /// Convert to a 0–255 RGB tuple (rounded).
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Parse a hex string (with or without `#`, 3 or 6 chars).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match stripped.len() {
            3 => {
                let r = u8::from_str_radix(&stripped[0..1], 16).ok()?;
                let g = u8::from_str_radix(&stripped[1..2], 16).ok()?;
                let b = u8::from_str_radix(&stripped[2..3], 16).ok()?;
                Some(Self {
                    r: (r * 17) as f64 / 255.0,
                    g: (g * 17) as f64 / 255.0,
                    b: (b * 17) as f64 / 255.0,
                })
            }
            6 => {
                let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
                let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
                let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
                Some(Self {
                    r: r as f64 / 255.0,
                    g: g as f64 / 255.0,
                    b: b as f64 / 255.0,
                })
            }
            _ => None,
        }
    }

    /// Format as uppercase RRGGBB hex (no `#` prefix).
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// HSV color with components in the 0.0–1.0 range.
///
/// Hue is a fraction of the color wheel, not degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvColor {
    h: f64,
    s: f64,
    v: f64,
}

impl Default for HsvColor {
    /// Black, the panel's initial color.
    fn default() -> Self {
        Self {
            h: 0.0,
            s: 0.0,
            v: 0.0,
        }
    }
}

impl HsvColor {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Hue (0.0–1.0, fraction of the wheel).
    pub fn h(&self) -> f64 {
        self.h
    }
    /// Saturation (0.0–1.0).
    pub fn s(&self) -> f64 {
        self.s
    }
    /// Value/brightness (0.0–1.0).
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Copy with the hue replaced.
    pub fn with_hue(self, h: f64) -> Self {
        Self { h, ..self }
    }

    /// Copy with the saturation replaced.
    pub fn with_saturation(self, s: f64) -> Self {
        Self { s, ..self }
    }

    /// Copy with the value replaced.
    pub fn with_value(self, v: f64) -> Self {
        Self { v, ..self }
    }

    /// Convert to RGB.
    pub fn to_rgb(self) -> RgbColor {
        let (r, g, b) = math::hsv_to_rgb(self.h, self.s, self.v);
        RgbColor { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-5;

    #[test]
    fn builders_replace_one_channel() {
        let c = RgbColor::new(0.1, 0.2, 0.3);
        assert_eq!(c.with_red(0.9), RgbColor::new(0.9, 0.2, 0.3));
        assert_eq!(c.with_green(0.9), RgbColor::new(0.1, 0.9, 0.3));
        assert_eq!(c.with_blue(0.9), RgbColor::new(0.1, 0.2, 0.9));

        let c = HsvColor::new(0.1, 0.2, 0.3);
        assert_eq!(c.with_hue(0.9), HsvColor::new(0.9, 0.2, 0.3));
        assert_eq!(c.with_saturation(0.9), HsvColor::new(0.1, 0.9, 0.3));
        assert_eq!(c.with_value(0.9), HsvColor::new(0.1, 0.2, 0.9));
    }

    #[test]
    fn default_is_black() {
        let rgb = HsvColor::default().to_rgb();
        assert_eq!((rgb.r(), rgb.g(), rgb.b()), (0.0, 0.0, 0.0));
    }

    #[test]
    fn editing_one_rgb_channel_preserves_the_others() {
        // A channel edit derives RGB, replaces one channel, and reconverts.
        // The untouched channels have to survive that round trip.
        let colors = [
            HsvColor::new(0.1, 0.8, 0.7),
            HsvColor::new(0.45, 0.3, 0.9),
            HsvColor::new(0.8, 0.95, 0.4),
        ];
        for hsv in colors {
            let rgb = hsv.to_rgb();
            let edited = rgb.with_red(0.33).to_hsv().to_rgb();
            assert_abs_diff_eq!(edited.r(), 0.33, epsilon = EPS);
            assert_abs_diff_eq!(edited.g(), rgb.g(), epsilon = EPS);
            assert_abs_diff_eq!(edited.b(), rgb.b(), epsilon = EPS);

            let edited = rgb.with_green(0.66).to_hsv().to_rgb();
            assert_abs_diff_eq!(edited.r(), rgb.r(), epsilon = EPS);
            assert_abs_diff_eq!(edited.g(), 0.66, epsilon = EPS);
            assert_abs_diff_eq!(edited.b(), rgb.b(), epsilon = EPS);

            let edited = rgb.with_blue(0.5).to_hsv().to_rgb();
            assert_abs_diff_eq!(edited.r(), rgb.r(), epsilon = EPS);
            assert_abs_diff_eq!(edited.g(), rgb.g(), epsilon = EPS);
            assert_abs_diff_eq!(edited.b(), 0.5, epsilon = EPS);
        }
    }

    #[test]
    fn hex_parses_both_forms() {
        let c = RgbColor::from_hex("FF8000").unwrap();
        assert_eq!(c.to_rgb8(), (255, 128, 0));

        let c = RgbColor::from_hex("#f80").unwrap();
        assert_eq!(c.to_rgb8(), (255, 136, 0));
    }

    #[test]
    fn hex_round_trips() {
        for hex in ["000000", "FFFFFF", "3B82F6", "80FF01"] {
            assert_eq!(RgbColor::from_hex(hex).unwrap().to_hex(), hex);
        }
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert_eq!(RgbColor::from_hex("xyz"), None);
        assert_eq!(RgbColor::from_hex("12345"), None);
        assert_eq!(RgbColor::from_hex("12345678"), None);
        assert_eq!(RgbColor::from_hex(""), None);
    }
}

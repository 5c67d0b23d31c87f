//! Color math — direct conversions without external dependencies.
//! All functions use normalized f64 in 0.0–1.0 for internal use.

/// RGB → HSV. All values 0.0–1.0; hue is a fraction of the full circle.
///
/// Achromatic and near-black inputs collapse to hue 0, saturation 0. When
/// two channels tie for the maximum, the sector is picked in r, g, b order.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    if delta <= 1e-5 || max <= 1e-5 {
        return (0.0, 0.0, v);
    }

    let s = delta / max;

    let mut h = if r >= max {
        (g - b) / delta
    } else if g >= max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    h /= 6.0;
    if h < 0.0 {
        h += 1.0;
    }

    (h, s, v)
}

/// HSV → RGB. All values 0.0–1.0.
///
/// Hue wraps: 1.0 is the same angle as 0.0. Sector 5 doubles as the
/// fallback arm for any hue that lands outside the hexagon.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s <= 1e-6 {
        return (v, v, v);
    }

    let h6 = if h >= 1.0 { 0.0 } else { h } * 6.0;
    let i = h6.floor() as i32;
    let f = h6 - h6.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match i {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

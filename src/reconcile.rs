//! Text-buffer reconciliation for one channel row.
//!
//! Each row owns two editable buffers: an integer box over 0–255 and a
//! float box showing the raw 0.0–1.0 value. While the user types, the
//! buffers are the display source and may disagree with the channel value;
//! they are overwritten only when the owning value actually transitions
//! (the edge trigger lives in `inputs::channel_row`). A commit parses the
//! buffer text; text that does not parse is dropped and the stale buffer
//! stays on screen.

use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

/// The pair of text buffers backing one channel row.
///
/// Signal handles are `Copy`, so the same buffers can be shared between
/// the text inputs and their commit handlers.
#[derive(Clone, Copy)]
pub(crate) struct ChannelBuffers {
    float_text: RwSignal<String>,
    int_text: RwSignal<String>,
}

impl ChannelBuffers {
    pub fn new() -> Self {
        Self {
            float_text: RwSignal::new(String::new()),
            int_text: RwSignal::new(String::new()),
        }
    }

    /// Buffer for the float box (plain `{}` form of the value).
    pub fn float_text(&self) -> RwSignal<String> {
        self.float_text
    }

    /// Buffer for the integer box (`floor(value * max_int)`).
    pub fn int_text(&self) -> RwSignal<String> {
        self.int_text
    }

    /// Overwrite both buffers with the canonical form of `value`.
    ///
    /// When the scaled value has no finite integer form, the integer
    /// buffer is left as it was.
    pub fn resync(&self, value: f64, max_int: f64) {
        self.float_text.set(format!("{}", value));
        let scaled = (value * max_int).floor();
        if scaled.is_finite() {
            self.int_text.set(format!("{}", scaled as i64));
        }
    }

    /// Parse the float buffer for a commit. The parsed value is passed
    /// through as-is, without clamping.
    pub fn commit_float(&self) -> Option<f64> {
        parse_number(&self.float_text.get_untracked())
    }

    /// Parse the integer buffer for a commit and scale it down to 0.0–1.0.
    pub fn commit_int(&self, max_int: f64) -> Option<f64> {
        parse_number(&self.int_text.get_untracked()).map(|v| v / max_int)
    }
}

/// Numeric parse shared by both buffers. Surrounding whitespace is
/// tolerated; anything that is not a number drops the commit.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resync_writes_canonical_forms() {
        let buffers = ChannelBuffers::new();
        buffers.resync(0.75, 255.0);
        assert_eq!(buffers.float_text().get_untracked(), "0.75");
        assert_eq!(buffers.int_text().get_untracked(), "191");

        buffers.resync(0.0, 255.0);
        assert_eq!(buffers.float_text().get_untracked(), "0");
        assert_eq!(buffers.int_text().get_untracked(), "0");

        buffers.resync(1.0, 255.0);
        assert_eq!(buffers.int_text().get_untracked(), "255");
    }

    #[test]
    fn resync_keeps_int_buffer_on_non_finite_value() {
        let buffers = ChannelBuffers::new();
        buffers.resync(0.5, 255.0);
        buffers.resync(f64::NAN, 255.0);
        assert_eq!(buffers.int_text().get_untracked(), "127");
    }

    #[test]
    fn float_commit_passes_value_through_unclamped() {
        let buffers = ChannelBuffers::new();
        buffers.float_text().set("0.4".to_string());
        assert_eq!(buffers.commit_float(), Some(0.4));

        // Out-of-range values are the owner's problem, not the buffer's.
        buffers.float_text().set("1.5".to_string());
        assert_eq!(buffers.commit_float(), Some(1.5));
        buffers.float_text().set("-0.25".to_string());
        assert_eq!(buffers.commit_float(), Some(-0.25));
    }

    #[test]
    fn int_commit_scales_by_max_int() {
        let buffers = ChannelBuffers::new();
        buffers.int_text().set("128".to_string());
        assert_eq!(buffers.commit_int(255.0), Some(128.0 / 255.0));
    }

    #[test]
    fn invalid_text_drops_the_commit_and_keeps_the_buffer() {
        let buffers = ChannelBuffers::new();
        buffers.float_text().set("abc".to_string());
        assert_eq!(buffers.commit_float(), None);
        assert_eq!(buffers.float_text().get_untracked(), "abc");

        buffers.int_text().set("12x".to_string());
        assert_eq!(buffers.commit_int(255.0), None);
        assert_eq!(buffers.int_text().get_untracked(), "12x");

        buffers.float_text().set("NaN".to_string());
        assert_eq!(buffers.commit_float(), None);
    }

    #[test]
    fn whitespace_is_tolerated() {
        let buffers = ChannelBuffers::new();
        buffers.int_text().set(" 64 ".to_string());
        assert_eq!(buffers.commit_int(255.0), Some(64.0 / 255.0));
    }
}

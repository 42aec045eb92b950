/// One scroll/viewport sample delivered by the host environment.
///
/// Both values are in CSS pixels. `scroll_offset` is expected to be `>= 0` and
/// `viewport_height` `> 0`; anything else is tolerated and mapped to a safe state by
/// [`crate::ScrollStateCalculator`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSignal {
    /// Vertical scroll distance from the top of the document.
    pub scroll_offset: f64,
    /// Current viewport height.
    pub viewport_height: f64,
}

impl ScrollSignal {
    /// Build a signal from raw host values.
    pub fn new(scroll_offset: f64, viewport_height: f64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
        }
    }

    /// True when the viewport height cannot anchor any window (zero, negative, or non-finite).
    pub fn is_degenerate(self) -> bool {
        !(self.viewport_height.is_finite() && self.viewport_height > 0.0)
    }

    /// Scroll offset with negative and NaN values pulled back to the document top.
    ///
    /// `+inf` is kept: it is past every window and saturates every output.
    pub fn clamped_offset(self) -> f64 {
        if self.scroll_offset.is_nan() {
            return 0.0;
        }
        self.scroll_offset.max(0.0)
    }
}

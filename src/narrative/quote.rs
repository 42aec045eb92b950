use crate::foundation::core::ScrollSignal;
use crate::foundation::math::lerp;
use crate::narrative::config::{QuoteReveal, ScrollWindows};

/// Number of reveal slots in the quote: twelve words plus the trailing arrows.
pub const QUOTE_SLOT_COUNT: usize = 13;

/// Opacity of quote word `word_index` at a scroll offset.
///
/// Reveal progress is `scroll_offset / (viewport_height * quote_animation_end)`. Word `i`
/// stays at the base opacity until progress reaches `i * word_threshold_multiplier`, then
/// ramps linearly to full opacity over `transition_duration`.
pub fn compute_word_opacity(
    word_index: usize,
    scroll_offset: f64,
    viewport_height: f64,
    windows: &ScrollWindows,
    reveal: &QuoteReveal,
) -> f64 {
    let signal = ScrollSignal::new(scroll_offset, viewport_height);
    if signal.is_degenerate() {
        return reveal.base_opacity;
    }
    let progress = signal.clamped_offset() / (viewport_height * windows.quote_animation_end);
    opacity_at(word_index, progress, reveal)
}

/// Opacities for all [`QUOTE_SLOT_COUNT`] slots, in reading order.
pub fn compute_word_opacities(
    scroll_offset: f64,
    viewport_height: f64,
    windows: &ScrollWindows,
    reveal: &QuoteReveal,
) -> [f64; QUOTE_SLOT_COUNT] {
    std::array::from_fn(|i| {
        compute_word_opacity(i, scroll_offset, viewport_height, windows, reveal)
    })
}

pub(crate) fn opacity_at(word_index: usize, progress: f64, reveal: &QuoteReveal) -> f64 {
    let threshold = word_index as f64 * reveal.word_threshold_multiplier;
    if progress < threshold {
        reveal.base_opacity
    } else if progress < threshold + reveal.transition_duration {
        let t = (progress - threshold) / reveal.transition_duration;
        lerp(reveal.base_opacity, reveal.full_opacity, t)
    } else {
        reveal.full_opacity
    }
}

#[cfg(test)]
#[path = "../../tests/unit/narrative/quote.rs"]
mod tests;

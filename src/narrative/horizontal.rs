use crate::foundation::core::ScrollSignal;
use crate::foundation::math::clamp_or_lo;
use crate::narrative::config::ScrollWindows;
use crate::narrative::phase::PhaseBoundaries;

/// Horizontal transition progress in percent, `[0, 100]`.
///
/// Zero up to and including the end of the quote phase, 100 from the end of the stable
/// hero phase onwards. In between, progress is normalized over the transition window
/// only (`quote_phase_end..transition_end`), so it reaches 100 at `transition_end` and
/// stays pinned there through the hero phase.
pub fn compute_horizontal_progress(
    scroll_offset: f64,
    viewport_height: f64,
    windows: &ScrollWindows,
) -> f64 {
    let signal = ScrollSignal::new(scroll_offset, viewport_height);
    if signal.is_degenerate() {
        return 0.0;
    }
    progress_within(
        signal.clamped_offset(),
        &PhaseBoundaries::new(viewport_height, windows),
    )
}

pub(crate) fn progress_within(offset: f64, bounds: &PhaseBoundaries) -> f64 {
    if offset <= bounds.quote_phase_end {
        return 0.0;
    }
    if offset >= bounds.hero_stable_end {
        return 100.0;
    }
    let range = bounds.transition_end - bounds.quote_phase_end;
    let progress = clamp_or_lo((offset - bounds.quote_phase_end) / range, 0.0, 1.0);
    progress * 100.0
}

#[cfg(test)]
#[path = "../../tests/unit/narrative/horizontal.rs"]
mod tests;

use crate::foundation::core::ScrollSignal;
use crate::foundation::math::window_fraction;
use crate::narrative::config::ScrollWindows;

/// Discrete stage of the scroll narrative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativePhase {
    /// Quote scene, words revealing.
    Landing,
    /// Horizontal slide from the quote scene to the hero scene.
    Transition,
    /// Hero scene pinned in place.
    Hero,
    /// Regular vertical scrolling (marquee and below).
    Vertical,
}

impl NarrativePhase {
    /// Lowercase name, as used in traces and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Transition => "transition",
            Self::Hero => "hero",
            Self::Vertical => "vertical",
        }
    }
}

impl std::fmt::Display for NarrativePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute scroll offsets (pixels) at which each phase ends.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PhaseBoundaries {
    /// Last offset of [`NarrativePhase::Landing`].
    pub quote_phase_end: f64,
    /// Last offset of [`NarrativePhase::Transition`].
    pub transition_end: f64,
    /// Last offset of [`NarrativePhase::Hero`].
    pub hero_stable_end: f64,
    /// Height of the narrative scroll container.
    pub scroll_container_height: f64,
}

impl PhaseBoundaries {
    /// Scale the configured windows by `viewport_height`.
    pub fn new(viewport_height: f64, windows: &ScrollWindows) -> Self {
        Self {
            quote_phase_end: viewport_height * windows.quote_phase_end,
            transition_end: viewport_height * windows.hero_transition_end,
            hero_stable_end: viewport_height * windows.hero_stable_end,
            scroll_container_height: viewport_height * windows.total_scroll_height,
        }
    }

    /// Phase owning `scroll_offset`. Upper bounds are inclusive: an offset exactly on a
    /// boundary belongs to the earlier phase.
    pub fn phase_at(&self, scroll_offset: f64) -> NarrativePhase {
        if scroll_offset <= self.quote_phase_end {
            NarrativePhase::Landing
        } else if scroll_offset <= self.transition_end {
            NarrativePhase::Transition
        } else if scroll_offset <= self.hero_stable_end {
            NarrativePhase::Hero
        } else {
            NarrativePhase::Vertical
        }
    }

    /// `(start, end)` offsets of the window that belongs to `phase`.
    pub fn window(&self, phase: NarrativePhase) -> (f64, f64) {
        match phase {
            NarrativePhase::Landing => (0.0, self.quote_phase_end),
            NarrativePhase::Transition => (self.quote_phase_end, self.transition_end),
            NarrativePhase::Hero => (self.transition_end, self.hero_stable_end),
            NarrativePhase::Vertical => (self.hero_stable_end, self.scroll_container_height),
        }
    }
}

/// Phase plus how far through that phase's window the scroll offset sits.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PhaseInfo {
    /// Current phase.
    pub phase: NarrativePhase,
    /// Fraction `[0, 1]` through the phase window.
    pub progress: f64,
    /// True only while the horizontal transition is under way.
    pub is_transitioning: bool,
}

impl PhaseInfo {
    pub(crate) fn idle() -> Self {
        Self {
            phase: NarrativePhase::Landing,
            progress: 0.0,
            is_transitioning: false,
        }
    }
}

/// Narrative phase for a scroll offset and viewport height.
///
/// A non-positive viewport height yields [`NarrativePhase::Landing`].
pub fn compute_phase(
    scroll_offset: f64,
    viewport_height: f64,
    windows: &ScrollWindows,
) -> NarrativePhase {
    let signal = ScrollSignal::new(scroll_offset, viewport_height);
    if signal.is_degenerate() {
        return NarrativePhase::Landing;
    }
    PhaseBoundaries::new(viewport_height, windows).phase_at(signal.clamped_offset())
}

/// [`compute_phase`] plus progress through the phase window.
pub fn compute_phase_info(
    scroll_offset: f64,
    viewport_height: f64,
    windows: &ScrollWindows,
) -> PhaseInfo {
    let signal = ScrollSignal::new(scroll_offset, viewport_height);
    if signal.is_degenerate() {
        return PhaseInfo::idle();
    }
    let offset = signal.clamped_offset();
    let bounds = PhaseBoundaries::new(viewport_height, windows);
    let phase = bounds.phase_at(offset);
    let (start, end) = bounds.window(phase);
    PhaseInfo {
        phase,
        progress: window_fraction(offset, start, end),
        is_transitioning: phase == NarrativePhase::Transition,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/narrative/phase.rs"]
mod tests;

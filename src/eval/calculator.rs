use crate::{
    foundation::core::ScrollSignal,
    foundation::error::NarrativeResult,
    foundation::math::window_fraction,
    narrative::config::NarrativeConfig,
    narrative::horizontal::progress_within,
    narrative::parallax::{ParallaxLayer, compute_parallax},
    narrative::phase::{NarrativePhase, PhaseBoundaries, PhaseInfo},
    narrative::quote::{QUOTE_SLOT_COUNT, opacity_at},
};

/// Everything the presentation layer needs for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DerivedVisualState {
    /// Current narrative phase.
    pub phase: NarrativePhase,
    /// Fraction `[0, 1]` through the current phase window.
    pub phase_progress: f64,
    /// Horizontal transition progress in `[0, 100]`.
    pub horizontal_progress_percent: f64,
    /// Portrait layer offset in `[0, 100]`.
    pub portrait_parallax_percent: f64,
    /// Quote layer offset in `[0, 120]`.
    pub quote_parallax_percent: f64,
    /// Hero layer offset in `[0, 90]`.
    pub hero_parallax_percent: f64,
    /// Per-slot quote opacities in `[0.15, 1]`.
    pub word_opacities: [f64; QUOTE_SLOT_COUNT],
    /// True once the horizontal transition has fully completed.
    pub is_hero_fully_visible: bool,
}

impl DerivedVisualState {
    /// Parallax offset of one layer.
    pub fn parallax(&self, layer: ParallaxLayer) -> f64 {
        match layer {
            ParallaxLayer::Portrait => self.portrait_parallax_percent,
            ParallaxLayer::Quote => self.quote_parallax_percent,
            ParallaxLayer::Hero => self.hero_parallax_percent,
        }
    }

    /// Phase together with its progress.
    pub fn phase_info(&self) -> PhaseInfo {
        PhaseInfo {
            phase: self.phase,
            progress: self.phase_progress,
            is_transitioning: self.phase == NarrativePhase::Transition,
        }
    }
}

/// Stateless mapping from a [`ScrollSignal`] to a [`DerivedVisualState`].
///
/// The calculator only holds its (validated, immutable) configuration; `compute` is pure
/// and may be called from any number of contexts at once.
#[derive(Clone, Debug, Default)]
pub struct ScrollStateCalculator {
    config: NarrativeConfig,
}

impl ScrollStateCalculator {
    /// Build a calculator over a validated config.
    pub fn new(config: NarrativeConfig) -> NarrativeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &NarrativeConfig {
        &self.config
    }

    /// Phase boundaries for a viewport height.
    pub fn boundaries(&self, viewport_height: f64) -> PhaseBoundaries {
        PhaseBoundaries::new(viewport_height, &self.config.scroll)
    }

    /// Derive the full visual state for one signal.
    ///
    /// A degenerate viewport height produces [`Self::idle_state`].
    pub fn compute(&self, signal: ScrollSignal) -> DerivedVisualState {
        if signal.is_degenerate() {
            return self.idle_state();
        }
        let cfg = &self.config;
        let offset = signal.clamped_offset();
        let bounds = self.boundaries(signal.viewport_height);

        let phase = bounds.phase_at(offset);
        let (start, end) = bounds.window(phase);
        let horizontal = progress_within(offset, &bounds);

        let reveal_progress = offset / (signal.viewport_height * cfg.scroll.quote_animation_end);
        let word_opacities = std::array::from_fn(|i| opacity_at(i, reveal_progress, &cfg.quote));

        DerivedVisualState {
            phase,
            phase_progress: window_fraction(offset, start, end),
            horizontal_progress_percent: horizontal,
            portrait_parallax_percent: compute_parallax(
                ParallaxLayer::Portrait,
                horizontal,
                &cfg.parallax,
            ),
            quote_parallax_percent: compute_parallax(
                ParallaxLayer::Quote,
                horizontal,
                &cfg.parallax,
            ),
            hero_parallax_percent: compute_parallax(ParallaxLayer::Hero, horizontal, &cfg.parallax),
            word_opacities,
            is_hero_fully_visible: horizontal >= 100.0,
        }
    }

    /// State for a host that has not reported a usable viewport yet: landing, no
    /// movement, every word at base opacity.
    pub fn idle_state(&self) -> DerivedVisualState {
        DerivedVisualState {
            phase: NarrativePhase::Landing,
            phase_progress: 0.0,
            horizontal_progress_percent: 0.0,
            portrait_parallax_percent: 0.0,
            quote_parallax_percent: 0.0,
            hero_parallax_percent: 0.0,
            word_opacities: [self.config.quote.base_opacity; QUOTE_SLOT_COUNT],
            is_hero_fully_visible: false,
        }
    }
}

/// Derive the visual state with the default configuration.
pub fn compute_visual_state(scroll_offset: f64, viewport_height: f64) -> DerivedVisualState {
    ScrollStateCalculator::default().compute(ScrollSignal::new(scroll_offset, viewport_height))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/calculator.rs"]
mod tests;

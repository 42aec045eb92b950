use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{NarrativeError, NarrativeResult};

/// Scroll windows, in multiples of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollWindows {
    /// End of the quote (landing) phase.
    pub quote_phase_end: f64,
    /// End of the horizontal transition into the hero scene.
    pub hero_transition_end: f64,
    /// End of the stable hero phase; vertical scrolling resumes afterwards.
    pub hero_stable_end: f64,
    /// Height of the whole narrative scroll container.
    pub total_scroll_height: f64,
    /// Window over which the quote words are revealed.
    pub quote_animation_end: f64,
}

impl Default for ScrollWindows {
    fn default() -> Self {
        Self {
            quote_phase_end: 3.0,
            hero_transition_end: 4.0,
            hero_stable_end: 5.0,
            total_scroll_height: 6.0,
            quote_animation_end: 2.5,
        }
    }
}

/// Per-layer parallax speed multipliers and upper travel bounds (percent).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParallaxSpeeds {
    /// Portrait speed relative to the base horizontal progress.
    pub portrait_speed: f64,
    /// Quote speed relative to the base horizontal progress.
    pub quote_speed: f64,
    /// Hero speed relative to the base horizontal progress.
    pub hero_speed: f64,
    /// Upper clamp for the portrait layer.
    pub portrait_max: f64,
    /// Upper clamp for the quote layer.
    pub quote_max: f64,
    /// Upper clamp for the hero layer.
    pub hero_max: f64,
}

impl Default for ParallaxSpeeds {
    fn default() -> Self {
        Self {
            portrait_speed: 0.8,
            quote_speed: 1.2,
            hero_speed: 0.9,
            portrait_max: 100.0,
            quote_max: 120.0,
            hero_max: 90.0,
        }
    }
}

/// Word-by-word quote reveal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct QuoteReveal {
    /// Reveal progress at which word `i` starts fading in is `i * word_threshold_multiplier`.
    pub word_threshold_multiplier: f64,
    /// Width of each word's fade, in reveal-progress units.
    pub transition_duration: f64,
    /// Opacity of a word that has not started revealing.
    pub base_opacity: f64,
    /// Opacity of a fully revealed word.
    pub full_opacity: f64,
}

impl Default for QuoteReveal {
    fn default() -> Self {
        Self {
            word_threshold_multiplier: 0.12,
            transition_duration: 0.08,
            base_opacity: 0.15,
            full_opacity: 1.0,
        }
    }
}

/// Tunables for the scroll narrative.
///
/// Every section has `#[serde(default)]`, so a JSON file only needs the fields it overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Phase and reveal windows.
    pub scroll: ScrollWindows,
    /// Parallax layers.
    pub parallax: ParallaxSpeeds,
    /// Quote reveal ramp.
    pub quote: QuoteReveal,
    /// Emit a debug trace event for every applied frame.
    pub debug_trace: bool,
}

impl NarrativeConfig {
    /// Parse a config from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> NarrativeResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| NarrativeError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> NarrativeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            NarrativeError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check that every window, speed and opacity is usable.
    pub fn validate(&self) -> NarrativeResult<()> {
        let s = &self.scroll;
        for (name, v) in [
            ("scroll.quote_phase_end", s.quote_phase_end),
            ("scroll.hero_transition_end", s.hero_transition_end),
            ("scroll.hero_stable_end", s.hero_stable_end),
            ("scroll.total_scroll_height", s.total_scroll_height),
            ("scroll.quote_animation_end", s.quote_animation_end),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(NarrativeError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        let ordered = s.quote_phase_end < s.hero_transition_end
            && s.hero_transition_end < s.hero_stable_end;
        if !ordered {
            return Err(NarrativeError::validation(
                "scroll windows must be strictly increasing (quote < transition < stable)",
            ));
        }
        if s.total_scroll_height < s.hero_stable_end {
            return Err(NarrativeError::validation(
                "scroll.total_scroll_height must be >= hero_stable_end",
            ));
        }

        let p = &self.parallax;
        for (name, v) in [
            ("parallax.portrait_speed", p.portrait_speed),
            ("parallax.quote_speed", p.quote_speed),
            ("parallax.hero_speed", p.hero_speed),
            ("parallax.portrait_max", p.portrait_max),
            ("parallax.quote_max", p.quote_max),
            ("parallax.hero_max", p.hero_max),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(NarrativeError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        let q = &self.quote;
        if !q.word_threshold_multiplier.is_finite() || q.word_threshold_multiplier < 0.0 {
            return Err(NarrativeError::validation(
                "quote.word_threshold_multiplier must be finite and >= 0",
            ));
        }
        if !q.transition_duration.is_finite() || q.transition_duration <= 0.0 {
            return Err(NarrativeError::validation(
                "quote.transition_duration must be finite and > 0",
            ));
        }
        for (name, v) in [
            ("quote.base_opacity", q.base_opacity),
            ("quote.full_opacity", q.full_opacity),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(NarrativeError::validation(format!("{name} must be in [0, 1]")));
            }
        }
        if q.base_opacity > q.full_opacity {
            return Err(NarrativeError::validation(
                "quote.base_opacity must be <= quote.full_opacity",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/narrative/config.rs"]
mod tests;

use crate::foundation::math::clamp_or_lo;
use crate::narrative::config::ParallaxSpeeds;

/// Layers that slide at their own speed during the horizontal transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParallaxLayer {
    /// Portrait image and the main landing content around it.
    Portrait,
    /// Quote text, travelling faster than the portrait.
    Quote,
    /// Hero scene container.
    Hero,
}

impl ParallaxLayer {
    /// Every layer, back to front.
    pub const ALL: [Self; 3] = [Self::Portrait, Self::Quote, Self::Hero];

    /// Speed multiplier applied to the base horizontal progress.
    pub fn speed(self, speeds: &ParallaxSpeeds) -> f64 {
        match self {
            Self::Portrait => speeds.portrait_speed,
            Self::Quote => speeds.quote_speed,
            Self::Hero => speeds.hero_speed,
        }
    }

    /// `(lower, upper)` travel bounds in percent.
    pub fn bounds(self, speeds: &ParallaxSpeeds) -> (f64, f64) {
        let upper = match self {
            Self::Portrait => speeds.portrait_max,
            Self::Quote => speeds.quote_max,
            Self::Hero => speeds.hero_max,
        };
        (0.0, upper)
    }
}

/// Parallax offset (percent) of `layer` for a base horizontal progress.
///
/// The result is clamped to the layer's bounds even when `horizontal_progress_percent`
/// is outside `[0, 100]`.
pub fn compute_parallax(
    layer: ParallaxLayer,
    horizontal_progress_percent: f64,
    speeds: &ParallaxSpeeds,
) -> f64 {
    let (lo, hi) = layer.bounds(speeds);
    clamp_or_lo(horizontal_progress_percent * layer.speed(speeds), lo, hi)
}

#[cfg(test)]
#[path = "../../tests/unit/narrative/parallax.rs"]
mod tests;

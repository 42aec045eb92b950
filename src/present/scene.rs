use crate::{
    content::QuoteContent,
    eval::calculator::DerivedVisualState,
    narrative::phase::NarrativePhase,
};

/// Horizontal shift of one layer, in viewport-width units (negative moves left).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayerShift {
    /// Translation along x, in `vw`.
    pub translate_x_vw: f64,
}

impl LayerShift {
    fn left_by(percent: f64) -> Self {
        Self {
            translate_x_vw: -percent,
        }
    }

    /// CSS transform for this shift, e.g. `translateX(-40vw)`.
    pub fn css(self) -> String {
        format!("translateX({}vw)", self.translate_x_vw)
    }
}

/// Transforms for every moving container on the page.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayerTransforms {
    /// Wrapper holding both scenes; follows the base horizontal progress.
    pub content: LayerShift,
    /// Landing content around the portrait.
    pub portrait: LayerShift,
    /// Quote block.
    pub quote: LayerShift,
    /// Hero container.
    pub hero: LayerShift,
}

/// A quote slot with its current opacity.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WordFrame {
    /// Slot index.
    pub index: usize,
    /// Displayed text.
    pub text: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Presentation-ready description of one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneFrame {
    /// Narrative phase.
    pub phase: NarrativePhase,
    /// Layer transforms.
    pub transforms: LayerTransforms,
    /// Quote lines with per-word opacity.
    pub quote_lines: Vec<Vec<WordFrame>>,
    /// Quote attribution.
    pub author: String,
    /// Hero scene has fully slid in.
    pub hero_fully_visible: bool,
}

impl SceneFrame {
    /// Lay out `state` over `quote`.
    pub fn build(state: &DerivedVisualState, quote: &QuoteContent) -> Self {
        let transforms = LayerTransforms {
            content: LayerShift::left_by(state.horizontal_progress_percent),
            portrait: LayerShift::left_by(state.portrait_parallax_percent),
            quote: LayerShift::left_by(state.quote_parallax_percent),
            hero: LayerShift::left_by(state.hero_parallax_percent),
        };
        let quote_lines = quote
            .lines()
            .into_iter()
            .map(|range| {
                range
                    .map(|i| WordFrame {
                        index: i,
                        text: quote.slots[i].clone(),
                        opacity: state.word_opacities[i],
                    })
                    .collect()
            })
            .collect();

        Self {
            phase: state.phase,
            transforms,
            quote_lines,
            author: quote.author.clone(),
            hero_fully_visible: state.is_hero_fully_visible,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/present/scene.rs"]
mod tests;

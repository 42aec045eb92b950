//! Text content shown by the narrative: the revealed quote and the marquee list.

use crate::narrative::quote::QUOTE_SLOT_COUNT;

/// Quote revealed word by word during the landing phase.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuoteContent {
    /// One entry per reveal slot, in reading order.
    pub slots: [String; QUOTE_SLOT_COUNT],
    /// Exclusive end index of each displayed line; the last line ends at
    /// [`QUOTE_SLOT_COUNT`].
    pub line_breaks: Vec<usize>,
    /// Attribution shown under the quote.
    pub author: String,
}

impl Default for QuoteContent {
    fn default() -> Self {
        let slots = [
            "Life",
            "can",
            "only",
            "be",
            "understood",
            "backwards",
            "but",
            "it",
            "must",
            "be",
            "lived",
            "forward",
            ">>>",
        ]
        .map(str::to_owned);
        Self {
            slots,
            line_breaks: vec![4, 6, 11, QUOTE_SLOT_COUNT],
            author: "-Søren Kierkegaard".to_owned(),
        }
    }
}

impl QuoteContent {
    /// Slot index ranges, one per line.
    pub fn lines(&self) -> Vec<std::ops::Range<usize>> {
        let mut out = Vec::with_capacity(self.line_breaks.len());
        let mut start = 0;
        for &end in &self.line_breaks {
            let end = end.min(QUOTE_SLOT_COUNT);
            if end > start {
                out.push(start..end);
                start = end;
            }
        }
        if start < QUOTE_SLOT_COUNT {
            out.push(start..QUOTE_SLOT_COUNT);
        }
        out
    }
}

/// One entry in the technology marquee.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MarqueeItem {
    /// Display name.
    pub name: String,
    /// Icon glyph.
    pub icon: String,
}

/// Horizontally looping list shown once vertical scrolling resumes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Marquee {
    /// Section heading.
    pub title: String,
    /// Items in display order.
    pub items: Vec<MarqueeItem>,
}

impl Default for Marquee {
    fn default() -> Self {
        let items = [
            ("Figma", "🎨"),
            ("Bun", "🥟"),
            ("Hono", "🔥"),
            ("React", "⚛️"),
            ("Vite", "⚡"),
            ("Node.js", "🟢"),
            ("VS Code", "💻"),
            ("Photoshop", "🖼️"),
            ("Lightroom", "📸"),
            ("DaVinci Resolve", "🎬"),
        ]
        .into_iter()
        .map(|(name, icon)| MarqueeItem {
            name: name.to_owned(),
            icon: icon.to_owned(),
        })
        .collect();
        Self {
            title: "Technologies I Use".to_owned(),
            items,
        }
    }
}

impl Marquee {
    /// Items laid out twice back to back, so the strip can wrap without a visible seam.
    pub fn looped_items(&self) -> impl Iterator<Item = &MarqueeItem> {
        self.items.iter().chain(self.items.iter())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/mod.rs"]
mod tests;

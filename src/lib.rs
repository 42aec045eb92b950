//! Scrollytell maps a vertical scroll position onto a scroll-driven visual narrative.
//!
//! A page first shows a quote whose words fade in one by one, then slides horizontally
//! from the quote scene to a hero scene with three parallax layers, then resumes plain
//! vertical scrolling. Everything the page needs per frame is a pure function of two
//! numbers: the scroll offset and the viewport height.
//!
//! # Pipeline overview
//!
//! 1. **Signal**: the host reports scroll/resize events into a [`SignalInbox`], which
//!    coalesces them (last write wins).
//! 2. **Compute**: once per display refresh, [`ScrollAdapter::pump_frame`] hands the
//!    latest [`ScrollSignal`] to [`ScrollStateCalculator::compute`], producing a
//!    [`DerivedVisualState`].
//! 3. **Present**: a [`PresentationSink`] applies the state; [`SceneFrame`] is a ready-made
//!    mapping to per-layer translations and per-word opacities.
//!
//! Constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total**: the calculation never fails; out-of-contract input maps to a safe state.
//! - **No IO in the calculation path**: config loading and tracing stay at the edges.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod adapter;
mod eval;
mod foundation;
mod narrative;
mod present;

/// Default narrative content (quote, marquee).
pub mod content;

pub use adapter::driver::{
    ListenerGuard, ListenerId, PresentationSink, ScrollAdapter, SignalHost,
};
pub use adapter::inbox::{PendingFrame, SignalInbox};
pub use eval::calculator::{DerivedVisualState, ScrollStateCalculator, compute_visual_state};
pub use foundation::core::ScrollSignal;
pub use foundation::error::{NarrativeError, NarrativeResult};
pub use narrative::config::{NarrativeConfig, ParallaxSpeeds, QuoteReveal, ScrollWindows};
pub use narrative::horizontal::compute_horizontal_progress;
pub use narrative::parallax::{ParallaxLayer, compute_parallax};
pub use narrative::phase::{
    NarrativePhase, PhaseBoundaries, PhaseInfo, compute_phase, compute_phase_info,
};
pub use narrative::quote::{QUOTE_SLOT_COUNT, compute_word_opacities, compute_word_opacity};
pub use present::scene::{LayerShift, LayerTransforms, SceneFrame, WordFrame};

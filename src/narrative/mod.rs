//! Scroll narrative calculations: phases, horizontal progress, parallax and quote reveal.
//!
//! Each calculation is a pure function of the scroll offset, the viewport height and the
//! relevant config section. [`crate::ScrollStateCalculator`] combines them per frame.

pub(crate) mod config;
pub(crate) mod horizontal;
pub(crate) mod parallax;
pub(crate) mod phase;
pub(crate) mod quote;

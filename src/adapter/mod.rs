//! Event plumbing between a host environment and the calculator.
//!
//! Hosts push scroll/resize events into a [`crate::SignalInbox`]; the frame owner pumps
//! [`crate::ScrollAdapter`] once per refresh.

pub(crate) mod driver;
pub(crate) mod inbox;

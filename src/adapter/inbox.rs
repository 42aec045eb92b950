use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::foundation::core::ScrollSignal;

#[derive(Debug)]
struct Pending {
    scroll_offset: f64,
    viewport_height: f64,
    events: u32,
    dirty: bool,
}

/// Signal drained from a [`SignalInbox`] for one display refresh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingFrame {
    /// Latest scroll offset and viewport height.
    pub signal: ScrollSignal,
    /// Host events folded into this frame since the previous drain.
    pub events: u32,
}

/// Coalescing mailbox between a host's event callbacks and the frame pump.
///
/// Scroll and resize events overwrite the pending values (last write wins); nothing is
/// queued. Cloning yields another handle onto the same mailbox.
#[derive(Clone, Debug)]
pub struct SignalInbox {
    inner: Arc<Mutex<Pending>>,
}

impl SignalInbox {
    /// New inbox at the top of the document. The first frame is always pending so the
    /// initial state gets applied.
    pub fn new(viewport_height: f64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Pending {
                scroll_offset: 0.0,
                viewport_height,
                events: 0,
                dirty: true,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Pending> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a scroll event.
    pub fn push_scroll(&self, scroll_offset: f64) {
        let mut p = self.lock();
        p.scroll_offset = scroll_offset;
        p.events = p.events.saturating_add(1);
        p.dirty = true;
    }

    /// Record a resize event.
    pub fn push_resize(&self, viewport_height: f64) {
        let mut p = self.lock();
        p.viewport_height = viewport_height;
        p.events = p.events.saturating_add(1);
        p.dirty = true;
    }

    /// True when a frame is waiting to be drained.
    pub fn has_pending(&self) -> bool {
        self.lock().dirty
    }

    /// Take the latest signal if anything changed since the last call.
    pub fn take(&self) -> Option<PendingFrame> {
        let mut p = self.lock();
        if !p.dirty {
            return None;
        }
        p.dirty = false;
        let events = std::mem::take(&mut p.events);
        Some(PendingFrame {
            signal: ScrollSignal::new(p.scroll_offset, p.viewport_height),
            events,
        })
    }

    /// Latest signal without draining it.
    pub fn peek(&self) -> ScrollSignal {
        let p = self.lock();
        ScrollSignal::new(p.scroll_offset, p.viewport_height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/adapter/inbox.rs"]
mod tests;

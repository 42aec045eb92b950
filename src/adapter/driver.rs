use crate::{
    adapter::inbox::SignalInbox,
    eval::calculator::{DerivedVisualState, ScrollStateCalculator},
};

/// Handle returned by a [`SignalHost`] for one attached listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Source of scroll and resize events (a window, a terminal, a test harness).
///
/// While attached, the host pushes its events into the given inbox.
pub trait SignalHost {
    /// Start delivering events to `inbox`.
    fn attach(&mut self, inbox: SignalInbox) -> ListenerId;
    /// Stop delivering events for `id`.
    fn detach(&mut self, id: ListenerId);
}

/// Consumer that turns a [`DerivedVisualState`] into pixels, styles or anything else.
pub trait PresentationSink {
    /// Apply one frame's state.
    fn apply(&mut self, state: &DerivedVisualState);
}

impl<F> PresentationSink for F
where
    F: FnMut(&DerivedVisualState),
{
    fn apply(&mut self, state: &DerivedVisualState) {
        self(state)
    }
}

/// Scoped subscription: the listener is detached from the host when the guard drops.
#[must_use = "dropping the guard detaches the listener immediately"]
pub struct ListenerGuard<'h, H: SignalHost + ?Sized> {
    host: &'h mut H,
    id: ListenerId,
}

impl<H: SignalHost + ?Sized> ListenerGuard<'_, H> {
    /// Listener id assigned by the host.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Borrow the host while the listener stays attached.
    pub fn host(&mut self) -> &mut H {
        &mut *self.host
    }
}

impl<H: SignalHost + ?Sized> Drop for ListenerGuard<'_, H> {
    fn drop(&mut self) {
        self.host.detach(self.id);
    }
}

/// Thin glue between a [`SignalHost`], the calculator and a [`PresentationSink`].
///
/// The host fills the inbox at whatever rate it produces events; the owner calls
/// [`ScrollAdapter::pump_frame`] once per display refresh, which recomputes at most once
/// using the latest values.
#[derive(Debug)]
pub struct ScrollAdapter {
    calculator: ScrollStateCalculator,
    inbox: SignalInbox,
}

impl ScrollAdapter {
    /// New adapter starting at the top of the document.
    pub fn new(calculator: ScrollStateCalculator, viewport_height: f64) -> Self {
        Self {
            calculator,
            inbox: SignalInbox::new(viewport_height),
        }
    }

    /// Calculator used for every frame.
    pub fn calculator(&self) -> &ScrollStateCalculator {
        &self.calculator
    }

    /// Another handle onto the adapter's inbox.
    pub fn inbox(&self) -> SignalInbox {
        self.inbox.clone()
    }

    /// Attach the adapter's inbox to `host` for the lifetime of the returned guard.
    pub fn subscribe<'h, H: SignalHost + ?Sized>(&self, host: &'h mut H) -> ListenerGuard<'h, H> {
        let id = host.attach(self.inbox.clone());
        tracing::trace!(listener = id.0, "attached scroll listener");
        ListenerGuard { host, id }
    }

    /// Drain the inbox and, if anything changed, compute and apply one state.
    ///
    /// Returns the applied state, or `None` when no event arrived since the last frame.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn pump_frame<S: PresentationSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Option<DerivedVisualState> {
        let frame = self.inbox.take()?;
        let state = self.calculator.compute(frame.signal);
        if self.calculator.config().debug_trace {
            let bounds = self.calculator.boundaries(frame.signal.viewport_height);
            tracing::debug!(
                scroll_offset = frame.signal.scroll_offset,
                viewport_height = frame.signal.viewport_height,
                phase = %state.phase,
                horizontal_progress = state.horizontal_progress_percent,
                quote_phase_end = bounds.quote_phase_end,
                transition_end = bounds.transition_end,
                hero_stable_end = bounds.hero_stable_end,
                coalesced_events = frame.events,
                "scroll frame"
            );
        }
        sink.apply(&state);
        Some(state)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/adapter/driver.rs"]
mod tests;

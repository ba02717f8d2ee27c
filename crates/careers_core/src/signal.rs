//! Frame-aligned scroll signal.
//!
//! Native scroll events arrive far more often than the page repaints. The
//! signal coalesces them: the first event in a frame asks the host for an
//! animation frame, later events in the same frame are dropped, and the frame
//! callback dispatches a single `scrolled` notification to every listener.

use std::fmt;

/// Handle returned by [`ScrollSignal::subscribe`], used to dispose the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What the host should do after forwarding a native scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// No frame is pending yet; schedule one.
    Schedule,
    /// A frame is already pending and will carry this event.
    Coalesced,
}

type Listener = Box<dyn FnMut()>;

#[derive(Default)]
pub struct ScrollSignal {
    pending: bool,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn on_native_scroll(&mut self) -> FrameRequest {
        if self.pending {
            return FrameRequest::Coalesced;
        }
        self.pending = true;
        FrameRequest::Schedule
    }

    /// Frame callback. Dispatches once if a scroll is pending and returns the
    /// number of listeners notified.
    pub fn on_animation_frame(&mut self) -> usize {
        if !self.pending {
            return 0;
        }
        self.pending = false;
        for (_, listener) in &mut self.listeners {
            listener();
        }
        self.listeners.len()
    }
}

impl fmt::Debug for ScrollSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSignal")
            .field("pending", &self.pending)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

//! Single-slot tick scheduling.
//!
//! Hosts translate a pending [`TickId`] into their own frame callback (a display refresh, a test
//! loop, a fixed-rate encoder) and hand it back through [`TickDriver::take_due`] when it fires.

/// Handle of one requested tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

/// Owns at most one outstanding tick request.
#[derive(Debug, Default)]
pub struct TickDriver {
    next_id: u64,
    pending: Option<TickId>,
    canceled: u64,
}

impl TickDriver {
    /// Idle driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a tick, replacing (and canceling) any request still pending.
    pub fn request_tick(&mut self) -> TickId {
        self.cancel();
        let id = TickId(self.next_id);
        self.next_id += 1;
        self.pending = Some(id);
        id
    }

    /// Drop the pending request, returning it if there was one.
    pub fn cancel(&mut self) -> Option<TickId> {
        let prev = self.pending.take();
        if prev.is_some() {
            self.canceled += 1;
        }
        prev
    }

    /// The outstanding request, if any.
    pub fn pending(&self) -> Option<TickId> {
        self.pending
    }

    /// `true` when nothing is scheduled.
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    /// Consume `id` if it is the outstanding request.
    ///
    /// Stale ids (already canceled or superseded) return `false` and leave state untouched.
    pub fn take_due(&mut self, id: TickId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Number of requests dropped before firing.
    pub fn canceled_count(&self) -> u64 {
        self.canceled
    }

    /// Number of requests issued so far.
    pub fn issued_count(&self) -> u64 {
        self.next_id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/driver.rs"]
mod tests;

//! Dropdown open/closed state and the deferred blur close.

use std::time::{Duration, Instant};

/// Whether the overlay is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Identifies one scheduled close. Tokens are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CloseToken(u64);

/// A close scheduled by an input blur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClose {
    pub token: CloseToken,
    pub deadline: Instant,
}

/// Holds at most one pending close.
///
/// Scheduling replaces any earlier close, so a stale blur can never fire
/// after a newer one.
#[derive(Debug, Default)]
pub struct CloseTimer {
    next_token: u64,
    pending: Option<PendingClose>,
}

impl CloseTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a close `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> PendingClose {
        let token = CloseToken(self.next_token);
        self.next_token += 1;
        let pending = PendingClose {
            token,
            deadline: now + delay,
        };
        self.pending = Some(pending);
        pending
    }

    /// Drop the pending close. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Take the pending close if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<PendingClose> {
        match self.pending {
            Some(p) if p.deadline <= now => self.pending.take(),
            _ => None,
        }
    }
}

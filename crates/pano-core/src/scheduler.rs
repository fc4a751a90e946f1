//! Animation-frame scheduling behind an injectable trait.
//!
//! The browser hands out `requestAnimationFrame` ids; native hosts and tests
//! use [`ManualScheduler`], which queues tokens until the owner fires them.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Identifies one scheduled tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickToken(pub i32);

/// Platform capability for "call me back on the next frame".
pub trait FrameScheduler {
    /// `None` when the platform refused the request; nothing will fire.
    fn schedule_tick(&mut self) -> Option<TickToken>;
    fn cancel_tick(&mut self, token: TickToken);
}

/// At most one outstanding tick per owner.
///
/// `Idle` is `None`, `Scheduled` is `Some(token)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingFrame {
    token: Option<TickToken>,
}

impl PendingFrame {
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.token.is_some()
    }

    #[inline]
    pub fn token(&self) -> Option<TickToken> {
        self.token
    }

    /// Schedule a tick unless one is already pending. Returns whether a new
    /// request went out. A refused request stays Idle so the next one retries.
    pub fn request<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if self.token.is_some() {
            return false;
        }
        self.token = scheduler.schedule_tick();
        self.token.is_some()
    }

    /// Consume the pending tick. A token that does not match (cancelled or
    /// stale) is rejected and leaves the state untouched.
    pub fn fire(&mut self, token: TickToken) -> bool {
        if self.token != Some(token) {
            return false;
        }
        self.token = None;
        true
    }

    /// Drop the pending tick, if any.
    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        match self.token.take() {
            Some(token) => {
                scheduler.cancel_tick(token);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Default)]
struct ManualQueue {
    next_id: i32,
    pending: VecDeque<TickToken>,
}

/// Scheduler that only queues tokens; the owner decides when a frame fires.
///
/// Clones share one queue so a test can hold a handle while the controls own
/// another.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<ManualQueue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Take the oldest pending tick so the caller can deliver it.
    pub fn pop(&self) -> Option<TickToken> {
        self.queue.borrow_mut().pending.pop_front()
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule_tick(&mut self) -> Option<TickToken> {
        let mut q = self.queue.borrow_mut();
        let token = TickToken(q.next_id);
        q.next_id = q.next_id.wrapping_add(1);
        q.pending.push_back(token);
        Some(token)
    }

    fn cancel_tick(&mut self, token: TickToken) {
        self.queue.borrow_mut().pending.retain(|t| *t != token);
    }
}

//! Virtual-time scheduling primitives shared by the page model.
//!
//! Nothing in the page model reads a wall clock. Time is a [`Duration`] since
//! the page loaded and only moves when the caller advances it, which keeps
//! every timeline in the crate reproducible in tests.
//!
//! Two suspension points exist in the page:
//!
//! - **Timers** ([`Scheduler`]): delayed sound playback. Each timer is tagged
//!   with the [`Epoch`] it was scheduled under so a restart can discard the
//!   whole generation at once.
//! - **Next frame** ([`FrameQueue`]): state changes requested from an event
//!   handler are held until the next animation frame, after the triggering
//!   event has finished propagating.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

/// Restart token for the pizza illustration.
///
/// Only ever moves forward. A new value means "discard all animation state
/// and start again at t=0".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Epoch(u64);

impl Epoch {
    pub const INITIAL: Epoch = Epoch(0);

    pub fn next(self) -> Self {
        Epoch(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle returned by [`Scheduler::schedule`], usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending<T> {
    epoch: Epoch,
    task: T,
}

/// Ordered set of pending timers.
///
/// Timers fire in due-time order; timers due at the same instant fire in the
/// order they were scheduled.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    queue: BTreeMap<(Duration, TimerId), Pending<T>>,
    due_at: HashMap<TimerId, Duration>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            queue: BTreeMap::new(),
            due_at: HashMap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire once the clock reaches `at`.
    pub fn schedule(&mut self, at: Duration, epoch: Epoch, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.insert((at, id), Pending { epoch, task });
        self.due_at.insert(id, at);
        id
    }

    /// Cancel a single timer. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.due_at.remove(&id) {
            Some(at) => self.queue.remove(&(at, id)).is_some(),
            None => false,
        }
    }

    /// Cancel every pending timer scheduled under `epoch`.
    ///
    /// Returns the number of timers dropped.
    pub fn cancel_epoch(&mut self, epoch: Epoch) -> usize {
        let stale: Vec<(Duration, TimerId)> = self
            .queue
            .iter()
            .filter(|(_, pending)| pending.epoch == epoch)
            .map(|(key, _)| *key)
            .collect();
        for key in &stale {
            self.queue.remove(key);
            self.due_at.remove(&key.1);
        }
        stale.len()
    }

    /// Remove and return every timer due at or before `now`, in firing order.
    pub fn drain_due(&mut self, now: Duration) -> Vec<(Epoch, T)> {
        let mut fired = Vec::new();
        while let Some(entry) = self.queue.first_entry() {
            if entry.key().0 > now {
                break;
            }
            let ((_, id), pending) = entry.remove_entry();
            self.due_at.remove(&id);
            fired.push((pending.epoch, pending.task));
        }
        fired
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(at, _)| *at)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Work deferred until the next animation frame.
#[derive(Debug)]
pub struct FrameQueue<T> {
    pending: Vec<T>,
}

impl<T> Default for FrameQueue<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<T> FrameQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&mut self, item: T) {
        self.pending.push(item);
    }

    /// Take everything queued so far, leaving the queue empty.
    ///
    /// Items deferred while the caller processes the returned batch land in
    /// the following frame.
    pub fn take_frame(&mut self) -> Vec<T> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn epoch_moves_forward() {
        let e = Epoch::INITIAL;
        assert_eq!(e.get(), 0);
        assert_eq!(e.next().get(), 1);
        assert!(e.next() > e);
        assert_eq!(e.next().next().to_string(), "2");
    }

    #[test]
    fn drain_due_fires_in_time_order() {
        let mut s = Scheduler::new();
        s.schedule(ms(300), Epoch::INITIAL, "c");
        s.schedule(ms(100), Epoch::INITIAL, "a");
        s.schedule(ms(200), Epoch::INITIAL, "b");

        let fired: Vec<_> = s.drain_due(ms(250)).into_iter().map(|(_, t)| t).collect();
        assert_eq!(fired, vec!["a", "b"]);
        assert_eq!(s.len(), 1);
        assert_eq!(s.next_due(), Some(ms(300)));
    }

    #[test]
    fn same_instant_fires_in_schedule_order() {
        let mut s = Scheduler::new();
        s.schedule(ms(100), Epoch::INITIAL, 1);
        s.schedule(ms(100), Epoch::INITIAL, 2);
        s.schedule(ms(100), Epoch::INITIAL, 3);
        let fired: Vec<_> = s.drain_due(ms(100)).into_iter().map(|(_, t)| t).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn nothing_fires_before_due() {
        let mut s = Scheduler::new();
        s.schedule(ms(100), Epoch::INITIAL, ());
        assert!(s.drain_due(ms(99)).is_empty());
        assert_eq!(s.drain_due(ms(100)).len(), 1);
        assert!(s.is_empty());
    }

    #[test]
    fn cancel_single_timer() {
        let mut s = Scheduler::new();
        let a = s.schedule(ms(100), Epoch::INITIAL, "a");
        s.schedule(ms(100), Epoch::INITIAL, "b");

        assert!(s.cancel(a));
        assert!(!s.cancel(a), "second cancel is a no-op");
        let fired: Vec<_> = s.drain_due(ms(100)).into_iter().map(|(_, t)| t).collect();
        assert_eq!(fired, vec!["b"]);
    }

    #[test]
    fn cancel_after_fire_returns_false() {
        let mut s = Scheduler::new();
        let id = s.schedule(ms(10), Epoch::INITIAL, ());
        s.drain_due(ms(10));
        assert!(!s.cancel(id));
    }

    #[test]
    fn cancel_epoch_drops_only_that_generation() {
        let mut s = Scheduler::new();
        let old = Epoch::INITIAL;
        let new = old.next();
        s.schedule(ms(100), old, "stale-1");
        s.schedule(ms(200), new, "fresh");
        s.schedule(ms(300), old, "stale-2");

        assert_eq!(s.cancel_epoch(old), 2);
        let fired = s.drain_due(ms(1_000));
        assert_eq!(fired, vec![(new, "fresh")]);
    }

    #[test]
    fn frame_queue_hands_out_one_batch() {
        let mut q = FrameQueue::new();
        q.defer(1);
        q.defer(2);
        assert_eq!(q.len(), 2);

        let batch = q.take_frame();
        assert_eq!(batch, vec![1, 2]);
        assert!(q.is_empty());
        assert!(q.take_frame().is_empty());
    }
}

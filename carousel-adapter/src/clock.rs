use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use carousel::{Clock, TimerHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Scheduled {
    handle: TimerHandle,
    interval_ms: u64,
    due_ms: u64,
}

/// A deterministic [`Clock`] for adapters that drive time themselves.
///
/// Hosts with a frame loop or a coarse timer call `advance_to(now_ms, ..)` and deliver the
/// emitted handles to the owning controller. Nothing fires from inside `set_recurring`.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: u64,
    next_id: u64,
    timers: Vec<Scheduled>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            now_ms,
            ..Self::default()
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of scheduled (not cancelled) timers.
    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    /// When the earliest timer fires next.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.due_ms).min()
    }

    /// Moves time forward and pushes every due timer into `due`, in firing order.
    ///
    /// Each timer fires at most once per call: firings missed during a stall are coalesced,
    /// and the timer is re-armed at the first multiple of its interval after `now_ms`. Ties
    /// fire in scheduling order. Time never moves backwards; an earlier `now_ms` only fires
    /// what was already due.
    pub fn advance_to(&mut self, now_ms: u64, due: &mut Vec<TimerHandle>) {
        let now_ms = now_ms.max(self.now_ms);
        let mut fired: Vec<(u64, TimerHandle)> = self
            .timers
            .iter()
            .filter(|t| t.due_ms <= now_ms)
            .map(|t| (t.due_ms, t.handle))
            .collect();
        fired.sort_unstable();
        due.extend(fired.into_iter().map(|(_, handle)| handle));

        for timer in self.timers.iter_mut().filter(|t| t.due_ms <= now_ms) {
            let missed = (now_ms - timer.due_ms) / timer.interval_ms + 1;
            timer.due_ms = timer
                .due_ms
                .saturating_add(missed.saturating_mul(timer.interval_ms));
        }
        self.now_ms = now_ms;
    }
}

impl Clock for ManualClock {
    fn set_recurring(&mut self, interval_ms: u64) -> TimerHandle {
        self.next_id = self.next_id.saturating_add(1);
        let handle = TimerHandle(self.next_id);
        let interval_ms = interval_ms.max(1);
        self.timers.push(Scheduled {
            handle,
            interval_ms,
            due_ms: self.now_ms.saturating_add(interval_ms),
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}

/// A [`ManualClock`] shared by several controllers on one event loop.
///
/// Handles are unique across every controller sharing the clock, so a single
/// [`crate::CarouselRegistry::deliver_tick`] call can route a firing to its owner.
#[derive(Clone, Debug, Default)]
pub struct SharedClock(Rc<RefCell<ManualClock>>);

impl SharedClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now_ms: u64) -> Self {
        Self(Rc::new(RefCell::new(ManualClock::starting_at(now_ms))))
    }

    pub fn now_ms(&self) -> u64 {
        self.0.borrow().now_ms()
    }

    pub fn live_timers(&self) -> usize {
        self.0.borrow().live_timers()
    }

    pub fn advance_to(&self, now_ms: u64, due: &mut Vec<TimerHandle>) {
        self.0.borrow_mut().advance_to(now_ms, due);
    }
}

impl Clock for SharedClock {
    fn set_recurring(&mut self, interval_ms: u64) -> TimerHandle {
        self.0.borrow_mut().set_recurring(interval_ms)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.0.borrow_mut().cancel(handle);
    }
}

/// Deferred event scheduling
///
/// Timers are advanced by the fixed update step of the game loop, never by the
/// wall clock, so every deferred action fires deterministically for a given
/// sequence of `dt` values.
///
/// Each state owner keeps its own `Timers` next to the state it mutates. The
/// owner advances the clock with [`Timers::advance`] and then drains due events
/// with [`Timers::pop_due`], applying each one to itself. Dropping a `Timers`
/// drops every pending entry, so an owner that goes away leaves nothing behind.
use std::time::Duration;

/// Smallest interval a repeating timer may use
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Handle to a scheduled timer, used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct TimerEntry<E> {
    handle: TimerHandle,
    deadline: Duration,
    /// `Some` for repeating timers
    interval: Option<Duration>,
    /// Scheduling order, breaks ties between equal deadlines
    seq: u64,
    event: E,
}

/// A set of pending one-shot and repeating events
#[derive(Debug)]
pub struct Timers<E> {
    /// Time elapsed since creation
    now: Duration,
    entries: Vec<TimerEntry<E>>,
    next_handle: u64,
    next_seq: u64,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timers<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            entries: Vec::new(),
            next_handle: 0,
            next_seq: 0,
        }
    }

    /// Schedule `event` to fire once, `delay` from now
    pub fn after(&mut self, delay: Duration, event: E) -> TimerHandle {
        self.insert(delay, None, event)
    }

    /// Schedule `event` to fire every `interval`, starting one interval from now
    pub fn every(&mut self, interval: Duration, event: E) -> TimerHandle {
        let interval = interval.max(MIN_INTERVAL);
        self.insert(interval, Some(interval), event)
    }

    fn insert(&mut self, delay: Duration, interval: Option<Duration>, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        let seq = self.next_seq;
        self.next_seq += 1;

        self.entries.push(TimerEntry {
            handle,
            deadline: self.now + delay,
            interval,
            seq,
            event,
        });

        log::debug!(
            "Timer {} scheduled in {:?} (repeating: {})",
            handle.0,
            delay,
            interval.is_some()
        );
        handle
    }

    /// Cancel a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        if let Some(index) = self.entries.iter().position(|e| e.handle == handle) {
            self.entries.swap_remove(index);
            log::debug!("Timer {} cancelled", handle.0);
            true
        } else {
            false
        }
    }

    /// Cancel every pending timer
    pub fn cancel_all(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("Cancelling {} pending timers", self.entries.len());
        }
        self.entries.clear();
    }

    /// Number of pending timers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move the clock forward. Due events are collected with `pop_due`.
    pub fn advance(&mut self, dt: Duration) {
        self.now += dt;
    }
}

impl<E: Clone> Timers<E> {
    /// Take the earliest due event, if any
    ///
    /// Repeating timers are re-armed one interval after their previous deadline,
    /// so a long `dt` yields every missed firing in order.
    pub fn pop_due(&mut self) -> Option<(TimerHandle, E)> {
        let now = self.now;
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.seq))
            .map(|(i, _)| i)?;

        match self.entries[index].interval {
            Some(interval) => {
                let seq = self.next_seq;
                self.next_seq += 1;

                let entry = &mut self.entries[index];
                entry.deadline += interval;
                entry.seq = seq;
                Some((entry.handle, entry.event.clone()))
            }
            None => {
                let entry = self.entries.swap_remove(index);
                Some((entry.handle, entry.event))
            }
        }
    }
}

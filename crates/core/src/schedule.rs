//! Host-driven rate limiting and frame batching.
//!
//! None of these types own a timer. The host calls `call` when an event arrives,
//! asks `deadline` when it should wake up next, and calls `poll` at (or after)
//! that deadline. This keeps the sequencing logic deterministic under a fixed
//! [`Clock`](crate::Clock).

use std::time::Duration;

use crate::time::Millis;

//
// ─── DEBOUNCE ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
struct Deferred<T> {
    due: Millis,
    value: Option<T>,
}

/// Delays a value until a quiet period of `wait` has elapsed.
///
/// Each call replaces the pending value and restarts the quiet period, so at most
/// one deferred execution is pending at a time. In leading mode the value is
/// returned synchronously when nothing is pending and no trailing value is kept.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    wait: Duration,
    leading: bool,
    pending: Option<Deferred<T>>,
}

impl<T> Debounce<T> {
    /// Trailing-edge debounce.
    #[must_use]
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            leading: false,
            pending: None,
        }
    }

    /// Leading-edge debounce: fires immediately, then ignores calls until quiet.
    #[must_use]
    pub fn leading(wait: Duration) -> Self {
        Self {
            wait,
            leading: true,
            pending: None,
        }
    }

    #[must_use]
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Registers a call. Returns the value when it must run right now.
    pub fn call(&mut self, now: Millis, value: T) -> Option<T> {
        let quiet = self.pending.as_ref().is_none_or(|pending| pending.due <= now);
        let due = now + self.wait;

        if self.leading {
            self.pending = Some(Deferred { due, value: None });
            return quiet.then_some(value);
        }

        self.pending = Some(Deferred {
            due,
            value: Some(value),
        });
        None
    }

    /// Returns the deferred value once its quiet period has elapsed.
    pub fn poll(&mut self, now: Millis) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.due <= now => self.pending.take().and_then(|p| p.value),
            _ => None,
        }
    }

    /// When the host should call [`poll`](Self::poll) next.
    #[must_use]
    pub fn deadline(&self) -> Option<Millis> {
        self.pending.as_ref().map(|pending| pending.due)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending execution, returning its value if one was waiting.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().and_then(|p| p.value)
    }
}

//
// ─── THROTTLE ──────────────────────────────────────────────────────────────────
//

/// Caps execution to once per `interval`, keeping the latest value for a
/// trailing execution.
///
/// A call outside the cooldown runs immediately. Calls inside the cooldown
/// coalesce into one trailing execution due when the cooldown ends; the most
/// recent value wins.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval: Duration,
    last_run: Option<Millis>,
    trailing: Option<Deferred<T>>,
}

impl<T> Throttle<T> {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            trailing: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Registers a call. Returns the value when it must run right now.
    pub fn call(&mut self, now: Millis, value: T) -> Option<T> {
        match self.last_run {
            Some(last) if now.since(last) < self.interval => {
                self.trailing = Some(Deferred {
                    due: last + self.interval,
                    value: Some(value),
                });
                None
            }
            _ => {
                self.last_run = Some(now);
                self.trailing = None;
                Some(value)
            }
        }
    }

    /// Returns the trailing value once the cooldown has ended.
    pub fn poll(&mut self, now: Millis) -> Option<T> {
        match &self.trailing {
            Some(trailing) if trailing.due <= now => {
                self.last_run = Some(now);
                self.trailing.take().and_then(|t| t.value)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Millis> {
        self.trailing.as_ref().map(|trailing| trailing.due)
    }

    #[must_use]
    pub fn has_trailing(&self) -> bool {
        self.trailing.is_some()
    }
}

//
// ─── FRAME QUEUE ───────────────────────────────────────────────────────────────
//

/// A visual update that can be batched into the next frame.
///
/// Two tasks with equal keys target the same thing; the later one replaces the
/// earlier one while both are queued.
pub trait FrameTask {
    type Key: PartialEq;

    fn key(&self) -> Self::Key;
}

/// Pending visual updates, flushed together once per frame.
#[derive(Debug, Clone)]
pub struct FrameQueue<T> {
    tasks: Vec<T>,
    armed: bool,
}

impl<T> Default for FrameQueue<T> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            armed: false,
        }
    }
}

impl<T: FrameTask> FrameQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a task for the next frame.
    ///
    /// Returns `true` when the queue was idle, meaning the host has to arm a
    /// frame callback. Later requests in the same frame return `false`.
    pub fn request(&mut self, task: T) -> bool {
        let key = task.key();
        match self.tasks.iter_mut().find(|queued| queued.key() == key) {
            Some(slot) => *slot = task,
            None => self.tasks.push(task),
        }

        let arm = !self.armed;
        self.armed = true;
        arm
    }

    /// Takes every queued task in request order and disarms the queue.
    pub fn drain(&mut self) -> Vec<T> {
        self.armed = false;
        std::mem::take(&mut self.tasks)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

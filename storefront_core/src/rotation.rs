//! Timer-driven rotation of a slide index.
//!
//! A [`Rotation`] owns at most one live [`RepeatingTimer`]. The timer is
//! acquired on [`Rotation::activate`] and released on deactivation, on drop,
//! and whenever the slide count or the interval changes. Dropping a timer
//! handle cancels it.
//!
//! Every timer replacement bumps a generation counter. A tick carries the
//! generation it was started with and is ignored once that generation is
//! stale, so a callback already in flight when its timer is cancelled can
//! never move the index.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::TimerError;
use crate::slider::SliderState;

/// Callback invoked on every timer firing.
pub type TickFn = Arc<dyn Fn() + Send + Sync>;

/// Callback invoked with the new index after each advance.
pub type AdvanceObserver = Arc<dyn Fn(usize) + Send + Sync>;

/// A cancellable repeating timer.
///
/// `start` schedules `tick` every `period`, first firing one period from
/// now. Dropping the returned handle must cancel the timer.
pub trait RepeatingTimer: Sized {
    fn start(period: Duration, tick: TickFn) -> Result<Self, TimerError>;
}

#[derive(Debug, Default)]
struct Shared {
    state: SliderState,
    generation: u64,
}

/// Rotating index over `len` slides, advanced by a timer of type `T`.
pub struct Rotation<T: RepeatingTimer> {
    shared: Arc<Mutex<Shared>>,
    len: usize,
    interval: Duration,
    active: bool,
    timer: Option<T>,
    observer: Option<AdvanceObserver>,
}

impl<T: RepeatingTimer> Rotation<T> {
    /// A stopped rotation at index 0.
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared::default())),
            len,
            interval,
            active: false,
            timer: None,
            observer: None,
        }
    }

    /// Register a callback that receives the index after every tick.
    ///
    /// The callback runs with the rotation's lock held, so it must not call
    /// back into this rotation. No call starts or is still running once
    /// [`deactivate`](Self::deactivate), a reconfiguration or drop returns.
    pub fn on_advance(mut self, observer: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Start rotating. With zero slides nothing is scheduled.
    pub fn activate(&mut self) {
        self.active = true;
        self.restart();
    }

    /// Stop rotating. The index keeps its current value.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.stop();
    }

    /// Change the slide count. An index past the new end resets to 0.
    pub fn set_len(&mut self, len: usize) {
        self.reconfigure(len, self.interval);
    }

    /// Change the tick period.
    pub fn set_interval(&mut self, interval: Duration) {
        self.reconfigure(self.len, interval);
    }

    /// Apply a new slide count and period with a single timer restart.
    /// Returns the (possibly reset) current index.
    pub fn reconfigure(&mut self, len: usize, interval: Duration) -> usize {
        if len == self.len && interval == self.interval {
            return self.current_index();
        }
        self.len = len;
        self.interval = interval;
        lock(&self.shared).state.clamp(len);
        if self.active {
            self.restart();
        }
        self.current_index()
    }

    pub fn current_index(&self) -> usize {
        lock(&self.shared).state.current_index()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether activation was requested (even if nothing is scheduled).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether a timer is currently live.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    fn stop(&mut self) {
        lock(&self.shared).generation += 1;
        if self.timer.take().is_some() {
            info!(len = self.len, "slider timer cancelled");
        }
    }

    fn restart(&mut self) {
        self.stop();
        if !self.active || self.len == 0 {
            return;
        }

        let generation = lock(&self.shared).generation;
        let shared = Arc::clone(&self.shared);
        let observer = self.observer.clone();
        let len = self.len;

        let tick: TickFn = Arc::new(move || {
            // Held through the notification: once `stop` has bumped the
            // generation, no observer call from this timer is still running.
            let mut guard = lock(&shared);
            if guard.generation != generation {
                return;
            }
            let index = guard.state.advance(len);
            debug!(index, len, "slider advanced");
            if let Some(observer) = &observer {
                observer(index);
            }
        });

        match T::start(self.interval, tick) {
            Ok(timer) => {
                info!(
                    len,
                    interval_ms = self.interval.as_millis() as u64,
                    "slider timer started"
                );
                self.timer = Some(timer);
            }
            Err(e) => warn!(error = %e, "slider timer unavailable, showing a static slide"),
        }
    }
}

impl<T: RepeatingTimer> Drop for Rotation<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<T: RepeatingTimer> fmt::Debug for Rotation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rotation")
            .field("index", &self.current_index())
            .field("len", &self.len)
            .field("interval", &self.interval)
            .field("active", &self.active)
            .field("running", &self.is_running())
            .finish()
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

//! Tokio-backed [`RepeatingTimer`].
//!
//! Each timer is a spawned task looping on [`tokio::time::interval_at`].
//! Dropping the handle aborts the task.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::error::TimerError;
use crate::rotation::{RepeatingTimer, TickFn};

/// Repeating timer running on the current tokio runtime.
#[derive(Debug)]
pub struct TokioTimer {
    handle: JoinHandle<()>,
}

impl RepeatingTimer for TokioTimer {
    fn start(period: Duration, tick: TickFn) -> Result<Self, TimerError> {
        if period.is_zero() {
            return Err(TimerError::ZeroPeriod);
        }
        let runtime = Handle::try_current().map_err(|e| TimerError::NoRuntime(e.to_string()))?;

        let first = Instant::now() + period;
        let handle = runtime.spawn(async move {
            let mut ticker = interval_at(first, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tick();
            }
        });

        Ok(Self { handle })
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

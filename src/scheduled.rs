//! Timer-driven background tasks with an owned cancellation handle.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A spawned timer task. Cancelling or dropping the handle aborts the task,
/// so no callback outlives the component that scheduled it.
///
/// Must be created from within a tokio runtime.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Run `tick` immediately and then once per `period`. Ticks run one at a
    /// time; a slow tick delays the next one instead of stacking up.
    pub fn repeating<F, Fut>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tick().await;
            }
        });
        Self { handle }
    }

    /// Run `task` once when `deadline` is reached.
    pub fn once_at<Fut>(deadline: Instant, task: Fut) -> Self
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            time::sleep_until(deadline).await;
            task.await;
        });
        Self { handle }
    }

    /// Run `task` once after `delay`, measured from now.
    pub fn once_after<Fut>(delay: Duration, task: Fut) -> Self
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::once_at(Instant::now() + delay, task)
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

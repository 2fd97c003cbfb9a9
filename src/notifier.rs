//! Time-boxed display of the latest batch's results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use crate::scheduled::ScheduledTask;
use crate::transfer_client::UploadResult;

pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(3_000);

/// Shows a result set for a fixed window, then clears it.
///
/// Only one countdown exists at a time: `show` cancels the running one and
/// starts over, and a countdown that was superseded never clears a newer set.
pub struct TransientNotifier {
    shared: Arc<NoticeShared>,
    countdown: Mutex<Option<ScheduledTask>>,
    duration: Duration,
}

struct NoticeShared {
    displayed: watch::Sender<Option<Vec<UploadResult>>>,
    generation: AtomicU64,
}

impl TransientNotifier {
    pub fn new(duration: Duration) -> Self {
        let (displayed, _) = watch::channel(None);
        Self {
            shared: Arc::new(NoticeShared {
                displayed,
                generation: AtomicU64::new(0),
            }),
            countdown: Mutex::new(None),
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Replace whatever is displayed and (re)start the countdown.
    pub fn show(&self, results: Vec<UploadResult>) {
        let mut countdown = self.lock_countdown();
        let mut generation = 0;
        self.shared.displayed.send_modify(|displayed| {
            generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *displayed = Some(results);
        });

        let shared = Arc::clone(&self.shared);
        let task = ScheduledTask::once_after(self.duration, async move {
            shared.expire(generation);
        });
        if let Some(previous) = countdown.replace(task) {
            previous.cancel();
        }
        debug!(generation, duration_ms = self.duration.as_millis() as u64, "Showing upload results");
    }

    /// Clear the display now and cancel the countdown.
    pub fn hide(&self) {
        if let Some(task) = self.lock_countdown().take() {
            task.cancel();
        }
        self.shared.displayed.send_if_modified(|displayed| {
            self.shared.generation.fetch_add(1, Ordering::SeqCst);
            displayed.take().is_some()
        });
    }

    pub fn current(&self) -> Option<Vec<UploadResult>> {
        self.shared.displayed.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.shared.displayed.borrow().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Vec<UploadResult>>> {
        self.shared.displayed.subscribe()
    }

    fn lock_countdown(&self) -> MutexGuard<'_, Option<ScheduledTask>> {
        self.countdown.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TransientNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

impl NoticeShared {
    fn expire(&self, generation: u64) {
        let cleared = self.displayed.send_if_modified(|displayed| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            displayed.take().is_some()
        });
        if cleared {
            debug!(generation, "Upload results expired");
        }
    }
}

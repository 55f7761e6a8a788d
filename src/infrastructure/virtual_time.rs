use crate::domain::ports::{Clock, ScheduledTask, Scheduler, TaskId};
use chrono::{NaiveDateTime, TimeDelta};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Deterministic clock and scheduler sharing one manually advanced timeline.
///
/// Clones share state, so a test keeps one handle and gives boxed clones to
/// the session. Nothing fires until [`VirtualTime::advance`] is called.
#[derive(Debug, Clone)]
pub struct VirtualTime {
    inner: Arc<Mutex<Timeline>>,
}

#[derive(Debug)]
struct Timeline {
    origin: NaiveDateTime,
    elapsed: Duration,
    queue: Vec<(Duration, ScheduledTask)>,
}

impl VirtualTime {
    pub fn new(origin: NaiveDateTime) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Timeline {
                origin,
                elapsed: Duration::ZERO,
                queue: Vec::new(),
            })),
        }
    }

    /// Number of scheduled tasks that are neither due nor cancelled.
    pub fn pending(&self) -> usize {
        self.lock()
            .queue
            .iter()
            .filter(|(_, task)| !task.token.is_cancelled())
            .count()
    }

    /// Moves time forward and returns the tasks that came due, earliest first.
    ///
    /// Cancelled tasks are discarded instead of returned.
    pub fn advance(&self, by: Duration) -> Vec<TaskId> {
        let mut timeline = self.lock();
        timeline.elapsed += by;
        let now = timeline.elapsed;

        let (mut due, waiting): (Vec<_>, Vec<_>) = timeline
            .queue
            .drain(..)
            .partition(|(at, _)| *at <= now);
        timeline.queue = waiting;

        due.sort_by_key(|(at, task)| (*at, task.id));
        due.into_iter()
            .filter(|(_, task)| !task.token.is_cancelled())
            .map(|(_, task)| task.id)
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Timeline> {
        self.inner.lock().expect("virtual time mutex poisoned")
    }
}

impl Clock for VirtualTime {
    fn now(&self) -> NaiveDateTime {
        let timeline = self.lock();
        timeline.origin + TimeDelta::from_std(timeline.elapsed).unwrap_or(TimeDelta::zero())
    }
}

impl Scheduler for VirtualTime {
    fn after(&self, task: ScheduledTask) {
        let mut timeline = self.lock();
        let at = timeline.elapsed + task.delay;
        timeline.queue.push((at, task));
    }
}

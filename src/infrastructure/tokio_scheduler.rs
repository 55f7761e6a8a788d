use crate::domain::event::UiEvent;
use crate::domain::ports::{ScheduledTask, Scheduler};
use tokio::sync::mpsc::UnboundedSender;

/// Schedules continuations on the tokio timer and delivers them as
/// [`UiEvent::TimerElapsed`] on the session's event channel.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    events: UnboundedSender<UiEvent>,
}

impl TokioScheduler {
    pub fn new(events: UnboundedSender<UiEvent>) -> Self {
        Self { events }
    }
}

impl Scheduler for TokioScheduler {
    fn after(&self, task: ScheduledTask) {
        let events = self.events.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = task.token.cancelled() => {
                    tracing::debug!(task = %task.id, "scheduled task cancelled");
                }
                _ = tokio::time::sleep(task.delay) => {
                    // Receiver gone means the session is over
                    let _ = events.send(UiEvent::TimerElapsed(task.id));
                }
            }
        });
    }
}

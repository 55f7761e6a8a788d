use super::ports::{ScheduledTask, TaskId};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingStatus {
    #[default]
    Idle,
    AwaitingConfirmation,
    Processing,
    Succeeded,
}

#[derive(Debug)]
struct PendingPayment {
    task: TaskId,
    token: CancellationToken,
}

/// Phase bookkeeping for the simulated payment.
///
/// The simulator owns the re-entrancy guard and the in-flight continuation;
/// the session performs the view work around each phase change.
#[derive(Debug)]
pub struct PaymentSimulator {
    status: ProcessingStatus,
    delay: Duration,
    pending: Option<PendingPayment>,
    next_task: u64,
}

impl PaymentSimulator {
    pub fn new(delay: Duration) -> Self {
        Self {
            status: ProcessingStatus::Idle,
            delay,
            pending: None,
            next_task: 1,
        }
    }

    pub fn status(&self) -> ProcessingStatus {
        self.status
    }

    pub fn is_processing(&self) -> bool {
        self.status == ProcessingStatus::Processing
    }

    /// The confirmation modal is up for the current draft.
    pub fn await_confirmation(&mut self) {
        if !self.is_processing() {
            self.status = ProcessingStatus::AwaitingConfirmation;
        }
    }

    /// The confirmation modal went away without a submit.
    pub fn abandon_confirmation(&mut self) {
        if self.status == ProcessingStatus::AwaitingConfirmation {
            self.status = ProcessingStatus::Idle;
        }
    }

    /// Enters `Processing` and returns the continuation to schedule.
    ///
    /// Returns `None` while a payment is already in flight; the request is dropped.
    pub fn begin(&mut self) -> Option<ScheduledTask> {
        if self.is_processing() {
            return None;
        }

        let id = TaskId(self.next_task);
        self.next_task += 1;
        let token = CancellationToken::new();

        self.status = ProcessingStatus::Processing;
        self.pending = Some(PendingPayment {
            task: id,
            token: token.clone(),
        });

        Some(ScheduledTask {
            id,
            delay: self.delay,
            token,
        })
    }

    /// Accepts the continuation for `task` if it is the live one.
    ///
    /// Stale ids and cancelled tasks are rejected. On success the status is
    /// `Succeeded` until [`PaymentSimulator::finish`] is called.
    pub fn complete(&mut self, task: TaskId) -> bool {
        match &self.pending {
            Some(pending) if pending.task == task && !pending.token.is_cancelled() => {
                self.pending = None;
                self.status = ProcessingStatus::Succeeded;
                true
            }
            _ => false,
        }
    }

    pub fn finish(&mut self) {
        self.status = ProcessingStatus::Idle;
    }

    /// Cancels the in-flight continuation, if any, and returns to `Idle`.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                pending.token.cancel();
                self.status = ProcessingStatus::Idle;
                true
            }
            None => false,
        }
    }
}

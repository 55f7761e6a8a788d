use super::session::CheckoutSession;
use crate::config::FlowConfig;
use crate::domain::event::{ScriptStep, UiEvent};
use crate::domain::ports::{ClockBox, EventSource, ViewHost};
use crate::infrastructure::tokio_scheduler::TokioScheduler;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Runs one checkout session on the tokio event loop.
///
/// UI events are applied in the order they arrive. Payment continuations
/// come back from [`TokioScheduler`] over a channel and are applied between
/// UI events, so the session itself is only ever touched from this loop.
pub struct SessionDriver<V: ViewHost> {
    session: CheckoutSession<V>,
    timers: UnboundedReceiver<UiEvent>,
}

impl<V: ViewHost> SessionDriver<V> {
    pub fn new(config: FlowConfig, view: V, clock: ClockBox) -> Self {
        let (tx, timers) = mpsc::unbounded_channel();
        let session = CheckoutSession::start(config, view, clock, Box::new(TokioScheduler::new(tx)));
        Self { session, timers }
    }

    pub fn session(&self) -> &CheckoutSession<V> {
        &self.session
    }

    /// Applies a UI event after any continuation that is already due.
    pub fn dispatch(&mut self, event: UiEvent) {
        self.drain_ready();
        self.session.handle(event);
    }

    /// Lets `duration` pass while still servicing timer continuations.
    pub async fn idle_for(&mut self, duration: Duration) {
        let sleep = tokio::time::sleep(duration);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                biased;
                Some(event) = self.timers.recv() => self.session.handle(event),
                _ = &mut sleep => break,
            }
        }

        // Timers that expired at the same instant may not have been polled yet
        tokio::task::yield_now().await;
        self.drain_ready();
    }

    /// Waits until no payment is in flight.
    pub async fn settle(&mut self) {
        while self.session.is_processing() {
            match self.timers.recv().await {
                Some(event) => self.session.handle(event),
                None => break,
            }
        }
    }

    /// Plays every step of `source`, then lets an in-flight payment finish.
    ///
    /// Rejected steps are logged and skipped.
    pub async fn run<S: EventSource + ?Sized>(mut self, source: &mut S) -> CheckoutSession<V> {
        loop {
            match source.next_step().await {
                Ok(Some(ScriptStep::Dispatch(event))) => self.dispatch(event),
                Ok(Some(ScriptStep::Wait(duration))) => self.idle_for(duration).await,
                Ok(None) => break,
                Err(e) => tracing::warn!(error = %e, "skipping malformed script step"),
            }
        }

        self.settle().await;
        self.session
    }

    fn drain_ready(&mut self) {
        while let Ok(event) = self.timers.try_recv() {
            self.session.handle(event);
        }
    }
}

use crate::config::FlowConfig;
use crate::domain::draft::TransactionDraft;
use crate::domain::event::{ESCAPE_KEY, UiEvent};
use crate::domain::modal::{ModalKind, ModalOrchestrator};
use crate::domain::payment::{PaymentSimulator, ProcessingStatus};
use crate::domain::ports::{ClockBox, ElementId, ModalField, SchedulerBox, TaskId, ViewHost};
use crate::domain::projection::{DisplayModel, ViewProjector};
use crate::domain::stage::{ButtonStage, ButtonStageController, Emphasis, StageAction};
use crate::domain::validation::FormValidator;

/// Class marking the chosen card.
pub const SELECTED_CLASS: &str = "selected";
/// Class giving the action button its affirmative look.
pub const AFFIRMATIVE_CLASS: &str = "affirmative";

/// The state of one checkout session.
///
/// `CheckoutSession` owns the draft and every component of the flow, plus the
/// injected view, clock and scheduler. All input arrives through
/// [`CheckoutSession::handle`], one event at a time; timer continuations come
/// back through the same entry point as [`UiEvent::TimerElapsed`].
pub struct CheckoutSession<V: ViewHost> {
    config: FlowConfig,
    draft: TransactionDraft,
    stage: ButtonStageController,
    modals: ModalOrchestrator,
    payment: PaymentSimulator,
    projector: ViewProjector,
    view: V,
    clock: ClockBox,
    scheduler: SchedulerBox,
}

impl<V: ViewHost> CheckoutSession<V> {
    /// Creates the session and paints the initial page state.
    ///
    /// # Arguments
    ///
    /// * `config` - Defaults for the draft and the flow's constants.
    /// * `view` - The page the session writes to.
    /// * `clock` - Source of receipt timestamps.
    /// * `scheduler` - Delivers the payment continuation after the delay.
    pub fn start(config: FlowConfig, view: V, clock: ClockBox, scheduler: SchedulerBox) -> Self {
        let draft = TransactionDraft::new(
            &config.default_phone,
            &config.default_amount,
            config.default_card(),
        );
        let mut session = Self {
            stage: ButtonStageController::new(),
            modals: ModalOrchestrator::new(),
            payment: PaymentSimulator::new(config.processing_delay()),
            projector: ViewProjector::new(config.currency.clone()),
            draft,
            config,
            view,
            clock,
            scheduler,
        };

        session
            .view
            .set_value(ElementId::PhoneInput, session.draft.phone());
        session
            .view
            .set_value(ElementId::AmountInput, &session.config.default_amount);
        for (index, card) in session.config.cards.iter().enumerate() {
            session.view.set_text(ElementId::CardOption(index), card);
        }
        if !session.config.cards.is_empty() {
            session
                .view
                .add_class(ElementId::CardOption(0), SELECTED_CLASS);
        }
        session.view.set_image_source(
            ElementId::ModalField(ModalKind::Processing, ModalField::Icon),
            &session.config.processing_icon,
        );
        session.refresh_button();

        tracing::debug!(
            phone = session.draft.phone(),
            amount = %session.draft.amount(),
            card = session.draft.selected_card(),
            "checkout session started"
        );
        session
    }

    pub fn draft(&self) -> &TransactionDraft {
        &self.draft
    }

    pub fn stage(&self) -> ButtonStage {
        self.stage.stage()
    }

    pub fn status(&self) -> ProcessingStatus {
        self.payment.status()
    }

    pub fn is_processing(&self) -> bool {
        self.payment.is_processing()
    }

    pub fn active_modal(&self) -> ModalKind {
        self.modals.active()
    }

    pub fn is_valid(&self) -> bool {
        FormValidator::is_valid(&self.draft)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Routes one event to the component that owns it.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Input { target, value } => self.on_input(target, &value),
            UiEvent::Click { target } => self.on_click(target),
            UiEvent::KeyDown { key } => {
                if key == ESCAPE_KEY {
                    let dismissed = self.modals.dismiss_active(&mut self.view);
                    self.after_dismiss(dismissed);
                } else {
                    tracing::trace!(key = %key, "key ignored");
                }
            }
            UiEvent::TouchStart { target } => {
                tracing::trace!(element = %target, "touch ignored");
            }
            UiEvent::TimerElapsed(task) => self.complete_payment(task),
        }
    }

    fn on_input(&mut self, target: ElementId, value: &str) {
        match target {
            ElementId::PhoneInput => {
                let phone = self.draft.set_phone(value);
                self.view.set_value(ElementId::PhoneInput, phone);
            }
            ElementId::AmountInput => {
                self.draft.set_amount(value);
            }
            other => {
                tracing::trace!(element = %other, "input on unknown field ignored");
                return;
            }
        }
        self.refresh_button();
    }

    fn on_click(&mut self, target: ElementId) {
        match target {
            ElementId::ActionButton => self.on_action_button(),
            ElementId::ConfirmButton => {
                if self.modals.active() == ModalKind::Confirmation {
                    self.submit_payment();
                }
            }
            ElementId::CardOption(index) => self.select_card(index),
            // Exactly the backdrop: clicks on the modal's content land on a ModalField
            ElementId::Modal(kind) => {
                if self.modals.close(kind, &mut self.view) {
                    self.after_dismiss(kind);
                }
            }
            other => tracing::trace!(element = %other, "click ignored"),
        }
    }

    fn on_action_button(&mut self) {
        let valid = self.is_valid();
        match self.stage.advance(valid) {
            StageAction::Ignored => {
                tracing::trace!("form invalid, action click ignored");
            }
            StageAction::Advanced => {
                tracing::debug!(stage = ?self.stage.stage(), "button stage advanced");
                self.refresh_button();
            }
            StageAction::OpenConfirmation => {
                tracing::debug!(stage = ?self.stage.stage(), "button stage advanced");
                self.refresh_button();
                self.render_modal(ModalKind::Confirmation);
                self.modals.show(ModalKind::Confirmation, &mut self.view);
                self.payment.await_confirmation();
            }
            StageAction::SubmitPayment => self.submit_payment(),
        }
    }

    /// Starts the simulated payment unless one is already in flight.
    pub fn submit_payment(&mut self) {
        let Some(task) = self.payment.begin() else {
            tracing::debug!("payment already processing, submit dropped");
            return;
        };

        self.modals.close(ModalKind::Confirmation, &mut self.view);
        self.render_modal(ModalKind::Processing);
        self.modals.show(ModalKind::Processing, &mut self.view);

        tracing::info!(
            task = %task.id,
            amount = %self.draft.amount(),
            phone = self.draft.phone(),
            "payment submitted"
        );
        self.scheduler.after(task);
    }

    fn complete_payment(&mut self, task: TaskId) {
        if !self.payment.complete(task) {
            tracing::debug!(task = %task, "stale payment continuation ignored");
            return;
        }

        self.modals.close(ModalKind::Processing, &mut self.view);
        self.view.set_image_source(
            ElementId::ModalField(ModalKind::Success, ModalField::Icon),
            &self.config.success_icon,
        );
        self.render_modal(ModalKind::Success);
        self.modals.show(ModalKind::Success, &mut self.view);

        self.stage.reset();
        self.payment.finish();
        self.refresh_button();

        tracing::info!(task = %task, amount = %self.draft.amount(), "payment succeeded");
    }

    fn select_card(&mut self, index: usize) {
        let Some(card) = self.config.cards.get(index) else {
            tracing::trace!(index, "unknown card ignored");
            return;
        };

        for other in 0..self.config.cards.len() {
            self.view
                .remove_class(ElementId::CardOption(other), SELECTED_CLASS);
        }
        self.view
            .add_class(ElementId::CardOption(index), SELECTED_CLASS);
        self.draft.select_card(card.clone());
    }

    /// Bookkeeping after the user closed `kind` by Escape or backdrop click.
    fn after_dismiss(&mut self, kind: ModalKind) {
        match kind {
            ModalKind::Confirmation => self.payment.abandon_confirmation(),
            ModalKind::Processing if self.config.cancel_on_dismiss => {
                if self.payment.cancel() {
                    self.stage.reset();
                    self.refresh_button();
                    tracing::info!("pending payment cancelled");
                }
            }
            ModalKind::Processing | ModalKind::Success | ModalKind::None => {}
        }
    }

    fn refresh_button(&mut self) {
        let valid = self.is_valid();
        self.stage.sync_validity(valid);
        let button = self.stage.render(valid, &self.config.labels);

        self.view.set_text(ElementId::ActionButton, &button.label);
        match button.emphasis {
            Emphasis::Affirmative => self
                .view
                .add_class(ElementId::ActionButton, AFFIRMATIVE_CLASS),
            Emphasis::Neutral => self
                .view
                .remove_class(ElementId::ActionButton, AFFIRMATIVE_CLASS),
        }
    }

    /// Projects the current draft and a fresh timestamp into `kind`'s fields.
    fn render_modal(&mut self, kind: ModalKind) {
        let DisplayModel {
            amount,
            phone,
            card,
            date,
            time,
        } = self.projector.project(&self.draft, self.clock.now());

        let fields = [
            (ModalField::Amount, amount),
            (ModalField::Phone, phone),
            (ModalField::Card, card),
            (ModalField::Date, date),
            (ModalField::Time, time),
        ];
        for (field, text) in fields {
            self.view.set_text(ElementId::ModalField(kind, field), &text);
        }
    }
}

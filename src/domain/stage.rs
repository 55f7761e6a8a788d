use crate::config::ButtonLabels;

/// Position of the single action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStage {
    #[default]
    Next,
    Pay,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Neutral,
    Affirmative,
}

/// What the button should look like right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub emphasis: Emphasis,
}

/// What the caller has to do after a click on the action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageAction {
    /// The form is invalid; the click is dropped without feedback.
    Ignored,
    /// `Next -> Pay`.
    Advanced,
    /// `Pay -> Confirm`: open the confirmation modal with a fresh projection.
    OpenConfirmation,
    /// Already at `Confirm`: hand the draft to the payment simulator.
    SubmitPayment,
}

/// Finite state machine behind the action button.
///
/// The stage is derived from validity whenever the form is invalid: any
/// call that observes an invalid form forces it back to `Next`.
#[derive(Debug, Default)]
pub struct ButtonStageController {
    stage: ButtonStage,
}

impl ButtonStageController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> ButtonStage {
        self.stage
    }

    /// Re-applies the validity gate after a field edit.
    pub fn sync_validity(&mut self, valid: bool) {
        if !valid {
            self.stage = ButtonStage::Next;
        }
    }

    pub fn advance(&mut self, valid: bool) -> StageAction {
        if !valid {
            self.stage = ButtonStage::Next;
            return StageAction::Ignored;
        }

        match self.stage {
            ButtonStage::Next => {
                self.stage = ButtonStage::Pay;
                StageAction::Advanced
            }
            ButtonStage::Pay => {
                self.stage = ButtonStage::Confirm;
                StageAction::OpenConfirmation
            }
            // Stays at Confirm until the payment completes and resets us
            ButtonStage::Confirm => StageAction::SubmitPayment,
        }
    }

    pub fn reset(&mut self) {
        self.stage = ButtonStage::Next;
    }

    /// Label and emphasis are a function of `(stage, valid)`, not of the stage alone.
    pub fn render(&self, valid: bool, labels: &ButtonLabels) -> ButtonView {
        let stage = if valid { self.stage } else { ButtonStage::Next };
        match stage {
            ButtonStage::Next => ButtonView {
                label: labels.next.clone(),
                emphasis: Emphasis::Neutral,
            },
            ButtonStage::Pay => ButtonView {
                label: labels.pay.clone(),
                emphasis: Emphasis::Neutral,
            },
            ButtonStage::Confirm => ButtonView {
                label: labels.confirm.clone(),
                emphasis: Emphasis::Affirmative,
            },
        }
    }
}

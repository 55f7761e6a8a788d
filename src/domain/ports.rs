use super::event::ScriptStep;
use super::modal::ModalKind;
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

/// A field rendered inside one of the modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModalField {
    Content,
    Amount,
    Phone,
    Card,
    Date,
    Time,
    Icon,
}

impl ModalField {
    const ALL: [ModalField; 7] = [
        ModalField::Content,
        ModalField::Amount,
        ModalField::Phone,
        ModalField::Card,
        ModalField::Date,
        ModalField::Time,
        ModalField::Icon,
    ];

    fn suffix(&self) -> &'static str {
        match self {
            ModalField::Content => "Content",
            ModalField::Amount => "Amount",
            ModalField::Phone => "Phone",
            ModalField::Card => "Card",
            ModalField::Date => "Date",
            ModalField::Time => "Time",
            ModalField::Icon => "Icon",
        }
    }
}

/// Stable identifier of a page element the session reads or writes.
///
/// The string form (`actionButton`, `processingAmount`, `card-1`, ...) is
/// what scripts and snapshots use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementId {
    Body,
    ActionButton,
    ConfirmButton,
    PhoneInput,
    AmountInput,
    CardOption(usize),
    /// The modal's backdrop, i.e. the modal element itself.
    Modal(ModalKind),
    ModalField(ModalKind, ModalField),
}

impl ElementId {
    /// The modal this element lives in, if any.
    pub fn modal(&self) -> Option<ModalKind> {
        match self {
            ElementId::Modal(kind) | ElementId::ModalField(kind, _) => Some(*kind),
            _ => None,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementId::Body => f.write_str("body"),
            ElementId::ActionButton => f.write_str("actionButton"),
            ElementId::ConfirmButton => f.write_str("confirmButton"),
            ElementId::PhoneInput => f.write_str("phoneInput"),
            ElementId::AmountInput => f.write_str("amountInput"),
            ElementId::CardOption(index) => write!(f, "card-{index}"),
            ElementId::Modal(kind) => write!(f, "{kind}Modal"),
            ElementId::ModalField(kind, field) => write!(f, "{kind}{}", field.suffix()),
        }
    }
}

impl FromStr for ElementId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let fixed = match s {
            "body" => Some(ElementId::Body),
            "actionButton" => Some(ElementId::ActionButton),
            "confirmButton" => Some(ElementId::ConfirmButton),
            "phoneInput" => Some(ElementId::PhoneInput),
            "amountInput" => Some(ElementId::AmountInput),
            _ => None,
        };
        if let Some(id) = fixed {
            return Ok(id);
        }

        if let Some(index) = s.strip_prefix("card-") {
            return index
                .parse()
                .map(ElementId::CardOption)
                .map_err(|_| format!("invalid card index in {s:?}"));
        }

        for kind in ModalKind::ALL {
            if let Some(rest) = s.strip_prefix(kind.prefix()) {
                if rest == "Modal" {
                    return Ok(ElementId::Modal(kind));
                }
                if let Some(field) = ModalField::ALL.into_iter().find(|f| f.suffix() == rest) {
                    return Ok(ElementId::ModalField(kind, field));
                }
            }
        }

        Err(format!("unknown element {s:?}"))
    }
}

/// Mutation surface of the host page.
///
/// Writes to elements the host does not render are dropped by the host.
pub trait ViewHost {
    fn set_text(&mut self, id: ElementId, text: &str);
    fn set_value(&mut self, id: ElementId, value: &str);
    fn add_class(&mut self, id: ElementId, class: &str);
    fn remove_class(&mut self, id: ElementId, class: &str);
    fn set_image_source(&mut self, id: ElementId, src: &str);
}

/// Source of the local wall-clock time shown on receipts.
pub trait Clock: Send {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// A continuation to be delivered back to the session after `delay`.
///
/// Schedulers must not deliver a task whose token has been cancelled.
#[derive(Debug, Clone)]
pub struct ScheduledTask {
    pub id: TaskId,
    pub delay: Duration,
    pub token: CancellationToken,
}

pub trait Scheduler: Send {
    fn after(&self, task: ScheduledTask);
}

/// Feeds interaction steps to a session driver.
#[async_trait]
pub trait EventSource: Send {
    /// Next step, `Ok(None)` once the source is exhausted.
    ///
    /// An `Err` rejects one step only; callers may keep reading.
    async fn next_step(&mut self) -> Result<Option<ScriptStep>>;
}

#[async_trait]
impl EventSource for UnboundedReceiver<ScriptStep> {
    async fn next_step(&mut self) -> Result<Option<ScriptStep>> {
        Ok(self.recv().await)
    }
}

pub type ClockBox = Box<dyn Clock>;
pub type SchedulerBox = Box<dyn Scheduler>;
pub type EventSourceBox = Box<dyn EventSource>;

use super::ports::{ElementId, TaskId};

pub const ESCAPE_KEY: &str = "Escape";

/// Everything the session reacts to: discrete UI events plus timer continuations.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Input { target: ElementId, value: String },
    Click { target: ElementId },
    KeyDown { key: String },
    TouchStart { target: ElementId },
    TimerElapsed(TaskId),
}

impl UiEvent {
    pub fn input(target: ElementId, value: impl Into<String>) -> Self {
        UiEvent::Input {
            target,
            value: value.into(),
        }
    }

    pub fn click(target: ElementId) -> Self {
        UiEvent::Click { target }
    }

    pub fn key(key: impl Into<String>) -> Self {
        UiEvent::KeyDown { key: key.into() }
    }

    pub fn escape() -> Self {
        Self::key(ESCAPE_KEY)
    }
}

/// One step of a scripted or live interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    Dispatch(UiEvent),
    /// Let time pass while timers keep firing.
    Wait(std::time::Duration),
}

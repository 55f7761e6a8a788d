use super::ports::{ElementId, ViewHost};
use std::fmt;

/// CSS class that makes a modal visible.
pub const SHOW_CLASS: &str = "show";
/// CSS class on the page body that suppresses background scrolling.
pub const MODAL_OPEN_CLASS: &str = "modal-open";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ModalKind {
    #[default]
    None,
    Confirmation,
    Processing,
    Success,
}

impl ModalKind {
    pub const ALL: [ModalKind; 3] = [
        ModalKind::Confirmation,
        ModalKind::Processing,
        ModalKind::Success,
    ];

    /// Prefix used in element identifiers, e.g. `processing` in `processingAmount`.
    pub fn prefix(&self) -> &'static str {
        match self {
            ModalKind::None => "none",
            ModalKind::Confirmation => "confirmation",
            ModalKind::Processing => "processing",
            ModalKind::Success => "success",
        }
    }
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Tracks the single visible modal.
///
/// Opening a modal closes whichever one was visible, so callers never have
/// to close before they show. Every transition is mirrored onto the view:
/// the `show` class on the modal element and the `modal-open` class on the
/// body.
#[derive(Debug, Default)]
pub struct ModalOrchestrator {
    active: ModalKind,
}

impl ModalOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ModalKind {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.active != ModalKind::None
    }

    /// Makes `kind` the active modal and returns the one it replaced.
    pub fn show(&mut self, kind: ModalKind, view: &mut dyn ViewHost) -> ModalKind {
        let previous = std::mem::replace(&mut self.active, kind);
        if previous != ModalKind::None && previous != kind {
            view.remove_class(ElementId::Modal(previous), SHOW_CLASS);
        }
        if kind != ModalKind::None {
            view.add_class(ElementId::Modal(kind), SHOW_CLASS);
        }
        self.sync_scroll_lock(view);
        previous
    }

    /// Closes `kind` if, and only if, it is the active modal.
    ///
    /// A close aimed at a modal that has already been replaced is ignored,
    /// so it cannot hide the newer one.
    pub fn close(&mut self, kind: ModalKind, view: &mut dyn ViewHost) -> bool {
        if kind == ModalKind::None || self.active != kind {
            return false;
        }
        self.active = ModalKind::None;
        view.remove_class(ElementId::Modal(kind), SHOW_CLASS);
        self.sync_scroll_lock(view);
        true
    }

    /// Escape handling: closes whatever is open and reports what it was.
    pub fn dismiss_active(&mut self, view: &mut dyn ViewHost) -> ModalKind {
        let active = self.active;
        self.close(active, view);
        active
    }

    fn sync_scroll_lock(&self, view: &mut dyn ViewHost) {
        if self.is_open() {
            view.add_class(ElementId::Body, MODAL_OPEN_CLASS);
        } else {
            view.remove_class(ElementId::Body, MODAL_OPEN_CLASS);
        }
    }
}

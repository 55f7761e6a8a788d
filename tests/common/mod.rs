#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use payflow::application::session::CheckoutSession;
use payflow::config::FlowConfig;
use payflow::domain::event::UiEvent;
use payflow::domain::modal::ModalKind;
use payflow::domain::ports::{ElementId, ModalField};
use payflow::infrastructure::recording_view::RecordingView;
use payflow::infrastructure::virtual_time::VirtualTime;
use std::time::Duration;

pub fn origin() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 7)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

pub fn start_session(config: FlowConfig) -> (CheckoutSession<RecordingView>, VirtualTime) {
    let time = VirtualTime::new(origin());
    let session = CheckoutSession::start(
        config,
        RecordingView::new(),
        Box::new(time.clone()),
        Box::new(time.clone()),
    );
    (session, time)
}

/// Moves virtual time forward and delivers whatever came due.
pub fn advance(session: &mut CheckoutSession<RecordingView>, time: &VirtualTime, millis: u64) {
    for task in time.advance(Duration::from_millis(millis)) {
        session.handle(UiEvent::TimerElapsed(task));
    }
}

pub fn click_action(session: &mut CheckoutSession<RecordingView>, times: usize) {
    for _ in 0..times {
        session.handle(UiEvent::click(ElementId::ActionButton));
    }
}

pub fn field(session: &CheckoutSession<RecordingView>, kind: ModalKind, field: ModalField) -> String {
    session
        .view()
        .text(ElementId::ModalField(kind, field))
        .to_string()
}

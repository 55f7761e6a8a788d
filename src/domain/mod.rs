//! Interaction state of the checkout flow and the ports it talks through.
//!
//! Nothing in here touches a real page or a real timer: the view, the clock
//! and the scheduler are injected through the traits in [`ports`].

pub mod draft;
pub mod event;
pub mod modal;
pub mod payment;
pub mod ports;
pub mod projection;
pub mod stage;
pub mod validation;

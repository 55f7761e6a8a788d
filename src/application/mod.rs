//! Application layer wiring the domain components into a running session.
//!
//! `CheckoutSession` is the explicit session state that owns the draft and
//! every component, and `SessionDriver` runs one session on a single-threaded
//! `tokio` event loop, feeding it UI events and timer continuations.

pub mod driver;
pub mod session;

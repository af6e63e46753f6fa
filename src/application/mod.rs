//! Application layer managing state and the generation workflow.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing application state, the request state machine, and the clipboard
//! acknowledgment timer.

pub mod state;

pub use state::*;

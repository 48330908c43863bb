//! Interactive view state, modeled as explicit stateful objects so the
//! behavior is testable without a browser runtime.

pub mod carousel;
pub mod contact;
pub mod timers;
pub mod viewport;

//! Project genesis wizard
//!
//! Drives a one-line idea through a fixed clarification dialogue into a
//! fresh project with its first whiteboard:
//! - `session`: the pure state machine (`WizardState` + `WizardSession`),
//!   testable without any service or rendering layer
//! - `controller`: layers the text generation calls on top (scoping
//!   questions with a built-in default set, whiteboard synthesis, project
//!   construction, cancel semantics)

pub mod controller;
pub mod session;

pub use controller::{WizardController, DEFAULT_SCOPING_QUESTIONS};
pub use session::{WizardSession, WizardState};

//! BMI assessment engine: validation, classification, and the form session
//! state machine.
//!
//! The engine is a pure, synchronous core. One submission runs a
//! validate-then-classify pass to completion; there is no I/O, no shared
//! state, and the only failure mode is incomplete input.

pub mod classifier;
pub mod session;
pub mod validator;

pub use classifier::{classify, compute_bmi, condition_for};
pub use session::Session;
pub use validator::validate;

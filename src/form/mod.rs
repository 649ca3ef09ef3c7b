//! Form controller module
//!
//! Reducer-style state updates, the submission state machine and the
//! controller that drives CEP lookups and receipt submission.

pub mod controller;
pub mod notice;
pub mod state;

pub use controller::{FormController, Submission};
pub use notice::{Notice, NoticeLevel};
pub use state::{FieldChange, apply, initial_state};

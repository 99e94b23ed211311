//! Application layer - Use cases and orchestration

pub mod edit;
pub mod reflect;

pub use edit::{edit_moment, edit_value, MomentPatch, ValuePatch};
pub use reflect::{finish_reflection, start_reflection, Insight};

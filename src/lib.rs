//! growth-journal - Personal growth journal
//!
//! Records meaningful moments, personal values and character strengths,
//! with guided reflections and weekly challenges. All state is held in an
//! in-memory store that is re-seeded from a fixed catalog on every start.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JournalError;

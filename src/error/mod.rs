//! Error module orchestrator.
//!
//! The formatting core never fails; only colour parsing, theme loading and
//! writer I/O surface these errors.

mod types;

pub use types::{EscapesError, Result};

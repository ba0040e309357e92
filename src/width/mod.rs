//! Width module orchestrator.
//!
//! Everything that needs to know how many terminal columns a string occupies
//! goes through here: the [`StyledText`] value that pairs output with its
//! visible width, and the [`WidthMeasure`] policies that compute it.

mod core;
mod measure;

pub use self::core::{StyledText, Widther};
pub use measure::{UnicodeWidth, UnicodeWidthCjk, WidthMeasure, display_width};

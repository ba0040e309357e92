//! Render module orchestrator.
//!
//! Alignment helpers that lean on the width carried by [`StyledText`] so
//! decorated cells line up without anyone re-measuring escape sequences.
//!
//! [`StyledText`]: crate::width::StyledText

mod align;
mod writer;

pub use align::{column_widths, pad_to, truncate_plain};
pub use writer::{LineWriter, LineWriterSettings};

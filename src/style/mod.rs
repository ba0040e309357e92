//! Style module orchestrator.
//!
//! The free functions re-exported here use the default [`UnicodeWidth`]
//! policy; build a [`Styler`] to measure with something else.
//!
//! [`UnicodeWidth`]: crate::width::UnicodeWidth

mod core;
mod styler;

pub use self::core::{Attribute, CLEAR_TO_EOL, CSI, OSC, RESET, ST, Style};
pub use styler::{
    Styler, bold, colorized, dim, hyperlink, italic, reverse, reverse_line, underline,
};

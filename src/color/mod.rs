//! Colour module orchestrator.
//!
//! Colours reach the formatter through the [`Rgba`] trait, which reports
//! 16-bit channels; the SGR encoder keeps only the high byte of each.

mod core;
mod term;

pub use self::core::{Rgb, Rgba, channel_u8};
pub use term::ansi_index_to_rgb;

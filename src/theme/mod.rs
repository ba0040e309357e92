//! Theme module orchestrator.
//!
//! Themes map names such as `"error"` or `"header"` to a [`Style`], loaded
//! from JSON so applications can restyle output without recompiling.
//!
//! [`Style`]: crate::style::Style

mod core;

pub use self::core::Theme;

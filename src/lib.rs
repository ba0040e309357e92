//! Terminal formatting escapes that know how wide their visible text is.
//!
//! Every formatting function returns a [`StyledText`]: the output string,
//! possibly full of ECMA-48 control sequences, together with the number of
//! columns the text occupies once rendered. Callers can pad and align styled
//! output using that width instead of guessing around the escape bytes.
//!
//! No terminfo is involved; the sequences assume an xterm-compatible terminal
//! with 24-bit colour and always restore normal rendition when done.
//!
//! ```
//! use escapes::{Rgb, bold, colorized};
//!
//! let red = Rgb::new(255, 0, 0);
//! let warning = colorized("warning", Some(&red), None);
//! assert_eq!(warning.width(), 7);
//! assert_eq!(bold("x").as_str(), "\x1b[1mx\x1b[0m");
//! ```

pub mod color;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod style;
pub mod theme;
pub mod width;

pub use color::{Rgb, Rgba};
pub use error::{EscapesError, Result};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{MetricSnapshot, RenderMetrics};
pub use render::{LineWriter, LineWriterSettings, pad_to};
pub use style::{
    Attribute, Style, Styler, bold, colorized, dim, hyperlink, italic, reverse, reverse_line,
    underline,
};
pub use theme::Theme;
pub use width::{StyledText, UnicodeWidth, UnicodeWidthCjk, WidthMeasure, Widther, display_width};

//! Terminal display width policies.
//!
//! The width tables themselves live in `unicode-width`; this module only picks
//! which rule set applies so callers can swap in a legacy CJK policy (or a
//! closure of their own) without touching the formatting code.

use unicode_width::UnicodeWidthStr;

/// Capability that turns plain text into a column count.
pub trait WidthMeasure: Send + Sync {
    fn measure(&self, text: &str) -> usize;
}

/// East-Asian-width aware measurement: wide characters take two columns,
/// combining and zero-width characters take none.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeWidth;

impl WidthMeasure for UnicodeWidth {
    fn measure(&self, text: &str) -> usize {
        UnicodeWidthStr::width(text)
    }
}

/// Like [`UnicodeWidth`], but ambiguous-width characters count as wide, the
/// way legacy CJK terminals render them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeWidthCjk;

impl WidthMeasure for UnicodeWidthCjk {
    fn measure(&self, text: &str) -> usize {
        UnicodeWidthStr::width_cjk(text)
    }
}

impl<F> WidthMeasure for F
where
    F: Fn(&str) -> usize + Send + Sync,
{
    fn measure(&self, text: &str) -> usize {
        self(text)
    }
}

/// Compute the display width of a string after stripping ANSI escapes.
///
/// Meant for text that arrived already decorated; the formatting functions
/// measure their plain input instead and never call this.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    UnicodeWidthStr::width(&*clean_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_and_combining_characters() {
        assert_eq!(UnicodeWidth.measure("abc"), 3);
        assert_eq!(UnicodeWidth.measure("日本"), 4);
        assert_eq!(UnicodeWidth.measure("e\u{301}"), 1);
    }

    #[test]
    fn cjk_policy_widens_ambiguous_characters() {
        assert_eq!(UnicodeWidth.measure("±"), 1);
        assert_eq!(UnicodeWidthCjk.measure("±"), 2);
        assert_eq!(UnicodeWidthCjk.measure("abc"), 3);
    }

    #[test]
    fn closures_act_as_measurers() {
        let bytes = |text: &str| text.len();
        assert_eq!(bytes.measure("日"), 3);
    }

    #[test]
    fn display_width_ignores_sgr_sequences() {
        assert_eq!(display_width("\x1b[1mhello\x1b[0m"), 5);
        assert_eq!(display_width("\x1b[38;2;255;0;0m漢字\x1b[0m"), 4);
    }
}

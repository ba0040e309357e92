//! Formatting functions.
//!
//! Every function takes plain text and returns a [`StyledText`] whose width is
//! measured from that text. The sequences always restore things back to normal
//! at the end, which is suboptimal when stacking styles but keeps output sane.
//! Nothing here consults terminfo; the bytes follow ECMA-48 plus the xterm
//! extensions for 24-bit colour and OSC-8 hyperlinks.

use crate::color::Rgba;
use crate::width::{StyledText, UnicodeWidth, WidthMeasure};

use super::core::{Attribute, CLEAR_TO_EOL, OSC, RESET, ST, Style, push_color, wrap_sgr};

const DEFAULT_STYLER: Styler = Styler::new();

/// Formatter bound to a width policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Styler<M = UnicodeWidth> {
    measurer: M,
}

impl Styler<UnicodeWidth> {
    pub const fn new() -> Self {
        Self {
            measurer: UnicodeWidth,
        }
    }
}

impl<M: WidthMeasure> Styler<M> {
    pub fn with_measurer(measurer: M) -> Self {
        Self { measurer }
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn plain(&self, text: &str) -> StyledText {
        StyledText::measured(text, &self.measurer)
    }

    pub fn attribute(&self, attribute: Attribute, text: &str) -> StyledText {
        StyledText::new(
            format!("{}{text}{RESET}", attribute.sequence()),
            self.measurer.measure(text),
        )
    }

    pub fn bold(&self, text: &str) -> StyledText {
        self.attribute(Attribute::Bold, text)
    }

    pub fn dim(&self, text: &str) -> StyledText {
        self.attribute(Attribute::Dim, text)
    }

    /// Many terminals don't implement italics, or ship with it turned off.
    pub fn italic(&self, text: &str) -> StyledText {
        self.attribute(Attribute::Italic, text)
    }

    pub fn underline(&self, text: &str) -> StyledText {
        self.attribute(Attribute::Underline, text)
    }

    pub fn reverse(&self, text: &str) -> StyledText {
        self.attribute(Attribute::Reverse, text)
    }

    /// OSC-8 link to `url` showing `text`.
    pub fn hyperlink(&self, url: &str, text: &str) -> StyledText {
        StyledText::new(
            format!("{OSC}8;;{url}{ST}{text}{OSC}8;;{ST}"),
            self.measurer.measure(text),
        )
    }

    /// Show `text` with the given foreground and background colours.
    ///
    /// Assumes 24-bit colour support. Both colours share one sequence; with
    /// neither, the text comes back undecorated.
    pub fn colorized(
        &self,
        text: &str,
        fg: Option<&dyn Rgba>,
        bg: Option<&dyn Rgba>,
    ) -> StyledText {
        let mut params = Vec::with_capacity(10);
        if let Some(fg) = fg {
            push_color(&mut params, "38", fg);
        }
        if let Some(bg) = bg {
            push_color(&mut params, "48", bg);
        }
        wrap_sgr(&params, text, self.measurer.measure(text))
    }

    pub fn paint(&self, style: &Style, text: &str) -> StyledText {
        style.paint_with(text, &self.measurer)
    }

    /// Apply `attribute` around a value that is already styled, reusing its
    /// width instead of measuring the decorated string.
    pub fn wrap(&self, inner: &StyledText, attribute: Attribute) -> StyledText {
        StyledText::new(
            format!("{}{inner}{RESET}", attribute.sequence()),
            inner.width(),
        )
    }

    /// Reverse-video `text` and clear to the end of the line.
    ///
    /// The result is a raw string with a trailing newline: how a terminal
    /// wraps at end of line varies, so there is no width worth reporting.
    pub fn reverse_line(&self, text: &str) -> String {
        format!(
            "{}{text}{CLEAR_TO_EOL}{RESET}\n",
            Attribute::Reverse.sequence()
        )
    }
}

pub fn bold(text: &str) -> StyledText {
    DEFAULT_STYLER.bold(text)
}

pub fn dim(text: &str) -> StyledText {
    DEFAULT_STYLER.dim(text)
}

/// Many terminals don't implement italics, or ship with it turned off.
pub fn italic(text: &str) -> StyledText {
    DEFAULT_STYLER.italic(text)
}

pub fn underline(text: &str) -> StyledText {
    DEFAULT_STYLER.underline(text)
}

/// Turn on reverse video for `text`.
pub fn reverse(text: &str) -> StyledText {
    DEFAULT_STYLER.reverse(text)
}

/// Link to `url` with the visible text `text`.
pub fn hyperlink(url: &str, text: &str) -> StyledText {
    DEFAULT_STYLER.hyperlink(url, text)
}

/// See [`Styler::colorized`].
pub fn colorized(text: &str, fg: Option<&dyn Rgba>, bg: Option<&dyn Rgba>) -> StyledText {
    DEFAULT_STYLER.colorized(text, fg, bg)
}

/// See [`Styler::reverse_line`].
pub fn reverse_line(text: &str) -> String {
    DEFAULT_STYLER.reverse_line(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::width::UnicodeWidthCjk;
    use crossterm::style::Color;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn attribute_wrappers_emit_exact_bytes() {
        assert_eq!(bold("x").as_str(), "\x1b[1mx\x1b[0m");
        assert_eq!(dim("x").as_str(), "\x1b[2mx\x1b[0m");
        assert_eq!(italic("x").as_str(), "\x1b[3mx\x1b[0m");
        assert_eq!(underline("x").as_str(), "\x1b[4mx\x1b[0m");
        assert_eq!(reverse("x").as_str(), "\x1b[7mx\x1b[0m");
    }

    #[test]
    fn attribute_wrappers_report_plain_width() {
        for text in ["", "foo", "日本語", "e\u{301}tude"] {
            let expected = UnicodeWidth.measure(text);
            for styled in [
                bold(text),
                dim(text),
                italic(text),
                underline(text),
                reverse(text),
            ] {
                assert_eq!(styled.width(), expected, "{text:?}");
            }
        }
    }

    #[test]
    fn hyperlink_bytes_and_width() {
        let link = hyperlink("http://e.g", "t");
        assert_eq!(link.as_str(), "\x1b]8;;http://e.g\x1b\\t\x1b]8;;\x1b\\");
        assert_eq!(link.width(), 1);
    }

    #[test]
    fn colorized_without_colours_is_plain() {
        let out = colorized("foo", None, None);
        assert_eq!(out.as_str(), "foo");
        assert_eq!(out.width(), 3);
    }

    #[test]
    fn colorized_foreground() {
        let out = colorized("foo", Some(&RED), None);
        assert_eq!(out.as_str(), "\x1b[38;2;255;0;0mfoo\x1b[0m");
        assert_eq!(out.width(), 3);
    }

    #[test]
    fn colorized_background() {
        let out = colorized("foo", None, Some(&RED));
        assert_eq!(out.as_str(), "\x1b[48;2;255;0;0mfoo\x1b[0m");
        assert_eq!(out.width(), 3);
    }

    #[test]
    fn colorized_both_share_one_sequence() {
        let out = colorized("foo", Some(&RED), Some(&RED));
        assert_eq!(out.as_str(), "\x1b[38;2;255;0;0;48;2;255;0;0mfoo\x1b[0m");
        assert_eq!(out.width(), 3);
    }

    #[test]
    fn colorized_accepts_crossterm_colours() {
        let fg = Color::Rgb { r: 1, g: 2, b: 3 };
        let out = colorized("a", Some(&fg), Some(&Color::AnsiValue(196)));
        assert_eq!(out.as_str(), "\x1b[38;2;1;2;3;48;2;255;0;0ma\x1b[0m");
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(bold("漢").width(), 2);
        assert_eq!(hyperlink("https://example.com", "漢").width(), 2);
        assert_eq!(colorized("漢", Some(&RED), None).width(), 2);
    }

    #[test]
    fn nested_plain_call_measures_what_it_is_given() {
        let inner = bold("ab");
        let outer = underline(inner.as_str());
        assert_eq!(outer.as_str(), "\x1b[4m\x1b[1mab\x1b[0m\x1b[0m");
        assert_eq!(outer.width(), UnicodeWidth.measure(inner.as_str()));
    }

    #[test]
    fn wrap_reuses_inner_width() {
        let inner = colorized("日本", Some(&RED), None);
        let outer = Styler::new().wrap(&inner, Attribute::Bold);
        assert_eq!(outer.width(), 4);
        assert!(outer.as_str().starts_with("\x1b[1m\x1b[38;2;255;0;0m"));
        assert!(outer.as_str().ends_with("\x1b[0m\x1b[0m"));
    }

    #[test]
    fn reverse_line_clears_and_breaks() {
        assert_eq!(reverse_line("status"), "\x1b[7mstatus\x1b[K\x1b[0m\n");
    }

    #[test]
    fn injected_measurer_drives_width() {
        let cjk = Styler::with_measurer(UnicodeWidthCjk);
        assert_eq!(cjk.bold("±").width(), 2);
        assert_eq!(bold("±").width(), 1);

        let fixed = Styler::with_measurer(|_: &str| 7usize);
        assert_eq!(fixed.hyperlink("u", "t").width(), 7);
        assert_eq!(fixed.plain("abc").width(), 7);
    }

    #[test]
    fn paint_uses_styler_measurer() {
        let cjk = Styler::with_measurer(UnicodeWidthCjk);
        let out = cjk.paint(&Style::new().dim(), "±±");
        assert_eq!(out.as_str(), "\x1b[2m±±\x1b[0m");
        assert_eq!(out.width(), 4);
    }
}

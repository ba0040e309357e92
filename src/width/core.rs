use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::measure::{UnicodeWidth, WidthMeasure};

/// Anything that renders to a string and knows how many columns it occupies.
pub trait Widther: fmt::Display {
    fn width(&self) -> usize;
}

impl Widther for str {
    fn width(&self) -> usize {
        UnicodeWidth.measure(self)
    }
}

impl Widther for String {
    fn width(&self) -> usize {
        UnicodeWidth.measure(self)
    }
}

/// Output string paired with the visible width of the text it was built from.
///
/// The text may carry invisible control sequences; the width never counts
/// them because producers compute it from their plain input rather than by
/// scanning the decorated result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyledText {
    text: String,
    width: usize,
}

impl StyledText {
    /// Pair `text` with an already known `width`.
    pub fn new(text: impl Into<String>, width: usize) -> Self {
        Self {
            text: text.into(),
            width,
        }
    }

    /// Undecorated text measured with the default [`UnicodeWidth`] policy.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::measured(text, &UnicodeWidth)
    }

    /// Undecorated text measured with the given policy.
    pub fn measured<M>(text: impl Into<String>, measurer: &M) -> Self
    where
        M: WidthMeasure + ?Sized,
    {
        let text = text.into();
        let width = measurer.measure(&text);
        Self { text, width }
    }

    /// Join values end to end; the width is the sum of the parts.
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = StyledText>,
    {
        parts.into_iter().sum()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Widther for StyledText {
    fn width(&self) -> usize {
        self.width
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for StyledText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl From<StyledText> for String {
    fn from(value: StyledText) -> Self {
        value.text
    }
}

impl Add for StyledText {
    type Output = StyledText;

    fn add(self, rhs: StyledText) -> StyledText {
        self + &rhs
    }
}

impl Add<&StyledText> for StyledText {
    type Output = StyledText;

    fn add(mut self, rhs: &StyledText) -> StyledText {
        self.text.push_str(&rhs.text);
        self.width += rhs.width;
        self
    }
}

impl Sum for StyledText {
    fn sum<I: Iterator<Item = StyledText>>(iter: I) -> Self {
        iter.fold(StyledText::default(), |acc, part| acc + part)
    }
}

impl<'a> Sum<&'a StyledText> for StyledText {
    fn sum<I: Iterator<Item = &'a StyledText>>(iter: I) -> Self {
        iter.fold(StyledText::default(), |acc, part| acc + part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_measures_itself() {
        let text = StyledText::plain("hello");
        assert_eq!(text.as_str(), "hello");
        assert_eq!(text.width(), 5);
        assert_eq!(text.to_string(), "hello");
    }

    #[test]
    fn explicit_width_is_kept_verbatim() {
        let text = StyledText::new("\x1b[1mab\x1b[0m", 2);
        assert_eq!(text.width(), 2);
        assert_eq!(text.into_string(), "\x1b[1mab\x1b[0m");
    }

    #[test]
    fn concatenation_sums_widths_without_rescanning() {
        let left = StyledText::new("\x1b[7mab\x1b[0m", 2);
        let right = StyledText::plain("日本");
        let joined = StyledText::concat([left, StyledText::plain(" "), right]);
        assert_eq!(joined.width(), 7);
        assert_eq!(joined.as_str(), "\x1b[7mab\x1b[0m 日本");
    }

    #[test]
    fn default_is_empty() {
        let empty = StyledText::default();
        assert!(empty.is_empty());
        assert_eq!(empty.width(), 0);
    }

    #[test]
    fn strings_are_widthers() {
        assert_eq!(Widther::width("漢"), 2);
        assert_eq!(Widther::width(&String::from("ab")), 2);
    }
}

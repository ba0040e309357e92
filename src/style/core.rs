use serde::{Deserialize, Serialize};

use crate::color::{Rgb, Rgba};
use crate::width::{StyledText, UnicodeWidth, WidthMeasure};

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";
/// Operating System Command introducer.
pub const OSC: &str = "\x1b]";
/// String Terminator closing an OSC.
pub const ST: &str = "\x1b\\";
/// Restore every rendition attribute to normal.
pub const RESET: &str = "\x1b[0m";
/// Erase from the cursor to the end of the line.
pub const CLEAR_TO_EOL: &str = "\x1b[K";

/// Single-parameter SGR attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Bold,
    Dim,
    /// Many terminals ignore this or ship with it disabled.
    Italic,
    Underline,
    Reverse,
}

impl Attribute {
    /// Emission order inside a combined sequence.
    pub const ALL: [Attribute; 5] = [
        Attribute::Bold,
        Attribute::Dim,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::Reverse,
    ];

    /// SGR parameter that switches the attribute on.
    pub const fn code(self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Dim => 2,
            Attribute::Italic => 3,
            Attribute::Underline => 4,
            Attribute::Reverse => 7,
        }
    }

    /// Full escape sequence that switches the attribute on.
    pub const fn sequence(self) -> &'static str {
        match self {
            Attribute::Bold => "\x1b[1m",
            Attribute::Dim => "\x1b[2m",
            Attribute::Italic => "\x1b[3m",
            Attribute::Underline => "\x1b[4m",
            Attribute::Reverse => "\x1b[7m",
        }
    }
}

/// Append a 24-bit colour group (`<selector>;2;r;g;b`) to an SGR parameter list.
pub(crate) fn push_color(params: &mut Vec<String>, selector: &str, color: &dyn Rgba) {
    let (r, g, b) = color.to_rgb8();
    params.push(selector.to_string());
    params.push("2".to_string());
    params.push(r.to_string());
    params.push(g.to_string());
    params.push(b.to_string());
}

/// Wrap `text` in one SGR sequence built from `params`, followed by a reset.
/// An empty parameter list leaves the text untouched.
pub(crate) fn wrap_sgr(params: &[String], text: &str, width: usize) -> StyledText {
    if params.is_empty() {
        return StyledText::new(text, width);
    }
    StyledText::new(
        format!("{CSI}{}m{text}{RESET}", params.join(";")),
        width,
    )
}

/// Composite rendition: any mix of attributes plus optional 24-bit colours,
/// emitted as a single SGR sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            dim: false,
            italic: false,
            underline: false,
            reverse: false,
        }
    }

    pub fn fg(mut self, color: impl Rgba) -> Self {
        self.fg = Some(color.to_rgb8().into());
        self
    }

    pub fn bg(mut self, color: impl Rgba) -> Self {
        self.bg = Some(color.to_rgb8().into());
        self
    }

    pub fn bold(self) -> Self {
        self.with(Attribute::Bold)
    }

    pub fn dim(self) -> Self {
        self.with(Attribute::Dim)
    }

    pub fn italic(self) -> Self {
        self.with(Attribute::Italic)
    }

    pub fn underline(self) -> Self {
        self.with(Attribute::Underline)
    }

    pub fn reverse(self) -> Self {
        self.with(Attribute::Reverse)
    }

    pub fn with(mut self, attribute: Attribute) -> Self {
        *self.flag_mut(attribute) = true;
        self
    }

    pub fn has(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Bold => self.bold,
            Attribute::Dim => self.dim,
            Attribute::Italic => self.italic,
            Attribute::Underline => self.underline,
            Attribute::Reverse => self.reverse,
        }
    }

    fn flag_mut(&mut self, attribute: Attribute) -> &mut bool {
        match attribute {
            Attribute::Bold => &mut self.bold,
            Attribute::Dim => &mut self.dim,
            Attribute::Italic => &mut self.italic,
            Attribute::Underline => &mut self.underline,
            Attribute::Reverse => &mut self.reverse,
        }
    }

    /// True when painting would emit no escape bytes at all.
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && !Attribute::ALL.iter().any(|a| self.has(*a))
    }

    /// SGR parameters in emission order: attributes, foreground, background.
    pub fn sgr_params(&self) -> Vec<String> {
        let mut params: Vec<String> = Attribute::ALL
            .iter()
            .filter(|a| self.has(**a))
            .map(|a| a.code().to_string())
            .collect();
        if let Some(fg) = &self.fg {
            push_color(&mut params, "38", fg);
        }
        if let Some(bg) = &self.bg {
            push_color(&mut params, "48", bg);
        }
        params
    }

    /// Opening escape sequence, or `None` for a plain style.
    pub fn sequence(&self) -> Option<String> {
        let params = self.sgr_params();
        if params.is_empty() {
            None
        } else {
            Some(format!("{CSI}{}m", params.join(";")))
        }
    }

    pub fn paint(&self, text: &str) -> StyledText {
        self.paint_with(text, &UnicodeWidth)
    }

    pub fn paint_with<M>(&self, text: &str, measurer: &M) -> StyledText
    where
        M: WidthMeasure + ?Sized,
    {
        wrap_sgr(&self.sgr_params(), text, measurer.measure(text))
    }

    /// Decorate an existing value, keeping the width it already carries.
    pub fn paint_styled(&self, inner: &StyledText) -> StyledText {
        wrap_sgr(&self.sgr_params(), inner.as_str(), inner.width())
    }
}

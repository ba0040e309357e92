use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::style::{Style, Styler};
use crate::width::{StyledText, WidthMeasure};

/// Named styles.
///
/// ```json
/// { "styles": { "error": { "fg": "#ff0000", "bold": true } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    styles: BTreeMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn insert(&mut self, name: impl Into<String>, style: Style) -> Option<Style> {
        self.styles.insert(name.into(), style)
    }

    pub fn with_style(mut self, name: impl Into<String>, style: Style) -> Self {
        self.insert(name, style);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Paint `text` with the named style; unknown names leave it plain.
    pub fn paint(&self, name: &str, text: &str) -> StyledText {
        self.paint_with(&Styler::new(), name, text)
    }

    pub fn paint_with<M: WidthMeasure>(
        &self,
        styler: &Styler<M>,
        name: &str,
        text: &str,
    ) -> StyledText {
        match self.get(name) {
            Some(style) => styler.paint(style, text),
            None => styler.plain(text),
        }
    }
}

//! Section entity - a named block of template content

use crate::{Prototype, Result};
use serde::{Deserialize, Serialize};

/// One content block of a template (e.g. "Objeto do Contrato").
///
/// Sections are pure value-like entities owned by exactly one [`Template`];
/// they carry no back-reference to their owner.
///
/// [`Template`]: crate::Template
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading shown in the document
    pub name: String,
    /// Body text, possibly containing placeholder markers
    pub content: String,
    /// Whether callers may edit this section after instantiation
    pub editable: bool,
    /// Placeholder names to be filled in when the template is used
    pub placeholders: Vec<String>,
}

impl Section {
    /// Create an editable section with no placeholders.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            editable: true,
            placeholders: Vec::new(),
        }
    }

    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholders.push(placeholder.into());
        self
    }
}

impl Prototype for Section {
    fn deep_clone(&self) -> Result<Self> {
        Ok(Self {
            name: self.name.clone(),
            content: self.content.clone(),
            editable: self.editable,
            placeholders: self.placeholders.iter().cloned().collect(),
        })
    }
}

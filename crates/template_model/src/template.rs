//! Template root aggregate and its deep-copy clone algorithm

use crate::{Prototype, Result, Section, Style, TemplateError, Workflow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A catalog document template: the root aggregate of the entity graph.
///
/// Every nested entity (sections, style, margins, workflow) and every
/// container is exclusively owned by one `Template`. The `style` and
/// `workflow` fields are optional only so that a half-built template is
/// representable; after construction through the builder methods or the
/// catalog factory they are always present, and [`Prototype::deep_clone`]
/// treats their absence as a precondition failure.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub title: String,
    pub category: String,
    /// Content blocks, in document order. May be empty, never absent.
    pub sections: Vec<Section>,
    /// Visual style; always `Some` once construction is complete.
    pub style: Option<Style>,
    /// Field names that must be filled before the document is issued
    pub required_fields: Vec<String>,
    /// Free-form key/value annotations (version, department, ...)
    pub metadata: HashMap<String, String>,
    /// Approval routing; always `Some` once construction is complete.
    pub workflow: Option<Workflow>,
    /// Ordered, duplicate-free labels used for catalog search
    pub tags: Vec<String>,
}

impl Template {
    /// Create an empty template. Style and workflow must be attached before
    /// the template is cloneable.
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            sections: Vec::new(),
            style: None,
            required_fields: Vec::new(),
            metadata: HashMap::new(),
            workflow: None,
            tags: Vec::new(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_workflow(mut self, workflow: Workflow) -> Self {
        self.workflow = Some(workflow);
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn with_required_field(mut self, field: impl Into<String>) -> Self {
        self.required_fields.push(field.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.add_tag(tag);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Append a tag, skipping duplicates (tags behave as an ordered set).
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Remove the section at `index`. Out-of-range indices are a no-op;
    /// returns whether a section was removed.
    pub fn remove_section(&mut self, index: usize) -> bool {
        if index < self.sections.len() {
            self.sections.remove(index);
            true
        } else {
            false
        }
    }

    /// Replace the tag at `index`. Out-of-range indices are a no-op;
    /// returns whether a tag was replaced.
    pub fn replace_tag(&mut self, index: usize, tag: impl Into<String>) -> bool {
        match self.tags.get_mut(index) {
            Some(slot) => {
                *slot = tag.into();
                true
            }
            None => false,
        }
    }
}

impl Prototype for Template {
    /// Field-by-field deep copy. Every container and nested entity of the
    /// result is newly allocated; the clone and the source share nothing
    /// mutable. Fails with [`TemplateError::MissingStyle`] or
    /// [`TemplateError::MissingWorkflow`] on a half-built template.
    fn deep_clone(&self) -> Result<Self> {
        let style = self
            .style
            .as_ref()
            .ok_or_else(|| TemplateError::MissingStyle(self.title.clone()))?
            .deep_clone()?;
        let workflow = self
            .workflow
            .as_ref()
            .ok_or_else(|| TemplateError::MissingWorkflow(self.title.clone()))?
            .deep_clone()?;

        let mut sections = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            sections.push(section.deep_clone()?);
        }

        let mut metadata = HashMap::with_capacity(self.metadata.len());
        for (key, value) in &self.metadata {
            metadata.insert(key.clone(), value.clone());
        }

        Ok(Self {
            title: self.title.clone(),
            category: self.category.clone(),
            sections,
            style: Some(style),
            required_fields: self.required_fields.iter().cloned().collect(),
            metadata,
            workflow: Some(workflow),
            tags: self.tags.iter().cloned().collect(),
        })
    }
}

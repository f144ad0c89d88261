//! Variant derivation - clone a base template and apply targeted edits

use serde::{Deserialize, Serialize};
use template_model::{Prototype, Result, Template};

/// Edits applied to a clone of the base template.
///
/// All edits are cosmetic and optional. Index-based edits targeting an
/// out-of-range position are silently skipped rather than failing; a variant
/// with a stale index is still a usable template.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantSpec {
    /// Replacement title
    pub title: Option<String>,
    /// Index of a section to drop
    pub remove_section: Option<usize>,
    /// Replace the tag at an index with a new label
    pub replace_tag: Option<(usize, String)>,
}

impl VariantSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_section_removed(mut self, index: usize) -> Self {
        self.remove_section = Some(index);
        self
    }

    pub fn with_tag_replaced(mut self, index: usize, tag: impl Into<String>) -> Self {
        self.replace_tag = Some((index, tag.into()));
        self
    }
}

/// Derive a differentiated variant: clone `base`, then apply `spec`.
///
/// The base is never touched; every edit lands on the clone. Fails only if
/// `base` is half-built (missing style or workflow).
pub fn derive_variant(base: &Template, spec: &VariantSpec) -> Result<Template> {
    let mut variant = base.deep_clone()?;

    if let Some(title) = &spec.title {
        variant.title = title.clone();
    }
    if let Some(index) = spec.remove_section {
        if !variant.remove_section(index) {
            tracing::debug!(index, "section removal skipped: index out of range");
        }
    }
    if let Some((index, tag)) = &spec.replace_tag {
        if !variant.replace_tag(*index, tag.clone()) {
            tracing::debug!(index, "tag replacement skipped: index out of range");
        }
    }

    tracing::debug!(base = %base.title, variant = %variant.title, "derived template variant");
    Ok(variant)
}

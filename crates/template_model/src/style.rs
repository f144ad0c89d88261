//! Style entities - visual presentation of a template
//!
//! A template owns exactly one [`Style`], which in turn owns its page
//! [`Margins`]. Both are copied wholesale when the template is cloned so a
//! variant can restyle itself without touching the base.

use crate::{Prototype, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Margins
// =============================================================================

/// Page margins in points.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Margins {
    pub fn new(top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Normal margins (1 inch all around).
    pub fn normal() -> Self {
        Self::new(72, 72, 72, 72)
    }

    /// Narrow margins (0.5 inch all around).
    pub fn narrow() -> Self {
        Self::new(36, 36, 36, 36)
    }

    /// Wide margins (1 inch vertical, 1.5 inch horizontal).
    pub fn wide() -> Self {
        Self::new(72, 72, 108, 108)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::normal()
    }
}

impl Prototype for Margins {
    fn deep_clone(&self) -> Result<Self> {
        Ok(Self {
            top: self.top,
            bottom: self.bottom,
            left: self.left,
            right: self.right,
        })
    }
}

// =============================================================================
// Style
// =============================================================================

/// Visual style applied to every page of a template.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Font family name
    pub font_family: String,
    /// Font size in points, always > 0
    pub font_size: u32,
    /// Header color as a hex code (e.g. "#003366")
    pub header_color: String,
    /// URL of the logo shown in the header
    pub logo_url: String,
    /// Page margins
    pub margins: Margins,
}

impl Style {
    pub fn new(
        font_family: impl Into<String>,
        font_size: u32,
        header_color: impl Into<String>,
        logo_url: impl Into<String>,
    ) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
            header_color: header_color.into(),
            logo_url: logo_url.into(),
            margins: Margins::default(),
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }
}

impl Prototype for Style {
    fn deep_clone(&self) -> Result<Self> {
        Ok(Self {
            font_family: self.font_family.clone(),
            font_size: self.font_size,
            header_color: self.header_color.clone(),
            logo_url: self.logo_url.clone(),
            margins: self.margins.deep_clone()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margins_presets() {
        assert_eq!(Margins::normal(), Margins::new(72, 72, 72, 72));
        assert_eq!(Margins::narrow(), Margins::new(36, 36, 36, 36));
        assert_eq!(Margins::wide(), Margins::new(72, 72, 108, 108));
        assert_eq!(Margins::default(), Margins::normal());
    }

    #[test]
    fn test_style_clone_owns_its_margins() {
        let style = Style::new("Arial", 11, "#003366", "https://example.com/logo.png")
            .with_margins(Margins::narrow());
        let mut copy = style.deep_clone().unwrap();

        assert_eq!(copy, style);

        copy.margins.top = 90;
        copy.font_size = 14;

        assert_eq!(style.margins.top, 36);
        assert_eq!(style.font_size, 11);
    }
}

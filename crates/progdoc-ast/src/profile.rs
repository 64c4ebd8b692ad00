//! Formatting profile
//!
//! The user-configured visual style applied uniformly across one export.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{Justification, ParagraphStyle, RunStyle, Spacing};
use crate::units::{line_spacing_twips, pt_to_half_points};

/// Spacing after every body paragraph, in twips.
pub const BODY_SPACING_AFTER: u32 = 120;

/// Body text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    #[default]
    Justified,
}

impl From<Alignment> for Justification {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Left => Justification::Left,
            Alignment::Center => Justification::Center,
            Alignment::Justified => Justification::Both,
        }
    }
}

/// Errors reported by [`FormattingProfile::validate`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// A numeric field is zero, negative or not a number
    #[error("Formatting field `{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// No font family was given
    #[error("Formatting field `fontFamily` must not be empty")]
    EmptyFontFamily,
}

/// User-chosen print formatting
///
/// Sizes are in points, margins in centimeters; `line_spacing` is a
/// multiplier where 1 means single spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingProfile {
    pub font_family: String,
    pub font_size: f64,
    #[serde(rename = "headingSize", alias = "headingFontSize")]
    pub heading_font_size: f64,
    pub heading_bold: bool,
    pub line_spacing: f64,
    pub alignment: Alignment,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub show_page_numbers: bool,
}

impl Default for FormattingProfile {
    fn default() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            font_size: 14.0,
            heading_font_size: 16.0,
            heading_bold: true,
            line_spacing: 1.0,
            alignment: Alignment::Justified,
            margin_top: 2.0,
            margin_bottom: 2.0,
            margin_left: 3.0,
            margin_right: 1.5,
            show_page_numbers: true,
        }
    }
}

impl FormattingProfile {
    /// Check that every numeric field is positive and a font is named
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.font_family.trim().is_empty() {
            return Err(ProfileError::EmptyFontFamily);
        }

        let fields = [
            ("fontSize", self.font_size),
            ("headingSize", self.heading_font_size),
            ("lineSpacing", self.line_spacing),
            ("marginTop", self.margin_top),
            ("marginBottom", self.margin_bottom),
            ("marginLeft", self.margin_left),
            ("marginRight", self.margin_right),
        ];
        for (field, value) in fields {
            // NaN fails this comparison too
            if !(value > 0.0) {
                return Err(ProfileError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    /// Run style for body text and table cells
    pub fn body_run(&self) -> RunStyle {
        RunStyle {
            font_family: self.font_family.clone(),
            size_half_points: pt_to_half_points(self.font_size),
            bold: false,
        }
    }

    /// Run style for section headings
    pub fn heading_run(&self) -> RunStyle {
        RunStyle {
            font_family: self.font_family.clone(),
            size_half_points: pt_to_half_points(self.heading_font_size),
            bold: self.heading_bold,
        }
    }

    /// Paragraph style for body paragraphs
    pub fn body_paragraph(&self) -> ParagraphStyle {
        ParagraphStyle {
            style_id: None,
            justification: Some(self.alignment.into()),
            spacing: Spacing {
                before: None,
                after: Some(BODY_SPACING_AFTER),
                line: Some(line_spacing_twips(self.line_spacing)),
            },
        }
    }
}

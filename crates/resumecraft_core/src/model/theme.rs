//! Themes: named color/font bundles plus a layout variant.

use crate::model::validation::ModelValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color regex"));

/// Closed vocabulary of preview/export layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeLayout {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
    Executive,
    Tech,
    Elegant,
    Contemporary,
}

impl ThemeLayout {
    pub const ALL: [ThemeLayout; 8] = [
        ThemeLayout::Modern,
        ThemeLayout::Classic,
        ThemeLayout::Minimal,
        ThemeLayout::Creative,
        ThemeLayout::Executive,
        ThemeLayout::Tech,
        ThemeLayout::Elegant,
        ThemeLayout::Contemporary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Minimal => "minimal",
            Self::Creative => "creative",
            Self::Executive => "executive",
            Self::Tech => "tech",
            Self::Elegant => "elegant",
            Self::Contemporary => "contemporary",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|layout| layout.as_str() == value)
    }

    /// Short description shown next to the theme picker.
    pub fn description(self) -> &'static str {
        match self {
            Self::Modern => "Clean lines with a bold accent color",
            Self::Classic => "Traditional serif layout with ruled headings",
            Self::Minimal => "Quiet typography and thin separators",
            Self::Creative => "Gradient headings for design-oriented roles",
            Self::Executive => "Banner headings for senior profiles",
            Self::Tech => "Monospace body tuned for engineering roles",
            Self::Elegant => "Italic headings on a warm page",
            Self::Contemporary => "Rounded page with underlined headings",
        }
    }
}

/// Active visual style of the preview and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub layout: ThemeLayout,
}

impl Default for Theme {
    /// Theme of a fresh session.
    fn default() -> Self {
        Self {
            id: "modern-blue".to_string(),
            name: "Modern Blue".to_string(),
            primary_color: "#2563eb".to_string(),
            secondary_color: "#64748b".to_string(),
            font_family: "Inter".to_string(),
            layout: ThemeLayout::Modern,
        }
    }
}

impl Theme {
    /// Validates id and color literals.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.id.trim().is_empty() {
            return Err(ModelValidationError::EmptyThemeId);
        }
        if !HEX_COLOR_RE.is_match(&self.primary_color) {
            return Err(ModelValidationError::InvalidColor {
                field: "primaryColor",
                value: self.primary_color.clone(),
            });
        }
        if !HEX_COLOR_RE.is_match(&self.secondary_color) {
            return Err(ModelValidationError::InvalidColor {
                field: "secondaryColor",
                value: self.secondary_color.clone(),
            });
        }
        Ok(())
    }
}

fn preset(
    id: &str,
    name: &str,
    primary_color: &str,
    secondary_color: &str,
    font_family: &str,
    layout: ThemeLayout,
) -> Theme {
    Theme {
        id: id.to_string(),
        name: name.to_string(),
        primary_color: primary_color.to_string(),
        secondary_color: secondary_color.to_string(),
        font_family: font_family.to_string(),
        layout,
    }
}

/// Returns the built-in theme presets, one per layout.
pub fn theme_presets() -> Vec<Theme> {
    vec![
        preset(
            "modern-blue",
            "Modern Blue",
            "#2563eb",
            "#64748b",
            "system-ui, -apple-system, sans-serif",
            ThemeLayout::Modern,
        ),
        preset(
            "classic-black",
            "Classic Black",
            "#1f2937",
            "#6b7280",
            "Georgia, \"Times New Roman\", serif",
            ThemeLayout::Classic,
        ),
        preset(
            "creative-purple",
            "Creative Purple",
            "#7c3aed",
            "#a78bfa",
            "\"Playfair Display\", Georgia, serif",
            ThemeLayout::Creative,
        ),
        preset(
            "minimal-gray",
            "Minimal Gray",
            "#374151",
            "#9ca3af",
            "\"Helvetica Neue\", Helvetica, Arial, sans-serif",
            ThemeLayout::Minimal,
        ),
        preset(
            "executive-navy",
            "Executive Navy",
            "#1e40af",
            "#3b82f6",
            "\"Segoe UI\", Tahoma, Geneva, sans-serif",
            ThemeLayout::Executive,
        ),
        preset(
            "tech-green",
            "Tech Green",
            "#059669",
            "#10b981",
            "\"SF Mono\", Monaco, \"Cascadia Code\", monospace",
            ThemeLayout::Tech,
        ),
        preset(
            "elegant-burgundy",
            "Elegant Burgundy",
            "#991b1b",
            "#dc2626",
            "\"Crimson Text\", Georgia, serif",
            ThemeLayout::Elegant,
        ),
        preset(
            "contemporary-teal",
            "Contemporary Teal",
            "#0f766e",
            "#14b8a6",
            "\"Inter\", system-ui, sans-serif",
            ThemeLayout::Contemporary,
        ),
    ]
}

/// Finds a preset by id.
pub fn find_theme_preset(id: &str) -> Option<Theme> {
    let id = id.trim();
    theme_presets().into_iter().find(|theme| theme.id == id)
}

//! Declarative style selection per theme layout.
//!
//! Every layout maps to one `LayoutStyle` through an exhaustive match, so a
//! new `ThemeLayout` variant cannot compile without a style.

use crate::model::theme::{Theme, ThemeLayout};
use serde::Serialize;

const DEFAULT_TEXT_COLOR: &str = "#1f2937";
const MONOSPACE_STACK: &str = "\"SF Mono\", Monaco, \"Cascadia Code\", monospace";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Top,
    Left,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineStyle {
    Solid,
    Dotted,
}

/// Page-level frame drawn around the whole preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageAccent {
    Plain,
    #[serde(rename_all = "camelCase")]
    Border {
        side: Side,
        width_px: u8,
        color: String,
    },
    #[serde(rename_all = "camelCase")]
    Gradient { from: String, to: String },
    #[serde(rename_all = "camelCase")]
    InsetOutline { color: String },
    #[serde(rename_all = "camelCase")]
    Rounded { radius_px: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingRule {
    pub side: Side,
    pub width_px: u8,
    pub line: LineStyle,
    pub color: String,
}

/// Treatment of section headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingStyle {
    pub color: String,
    pub font_size_px: u8,
    pub font_weight: u16,
    pub uppercase: bool,
    pub italic: bool,
    pub rule: Option<HeadingRule>,
    /// Filled banner behind the heading; text uses `color` on `background`.
    pub banner_background: Option<String>,
    /// Two-stop gradient applied to heading text.
    pub text_gradient: Option<(String, String)>,
}

impl HeadingStyle {
    fn base(theme: &Theme) -> Self {
        Self {
            color: theme.primary_color.clone(),
            font_size_px: 16,
            font_weight: 600,
            uppercase: false,
            italic: false,
            rule: None,
            banner_background: None,
            text_gradient: None,
        }
    }
}

/// Resolved visual style of the preview for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStyle {
    pub layout: ThemeLayout,
    /// Picker caption for the layout.
    pub description: &'static str,
    pub page_background: &'static str,
    pub text_color: &'static str,
    pub font_family: String,
    pub page_accent: PageAccent,
    pub heading: HeadingStyle,
}

/// Resolves the preview style for `theme`.
pub fn layout_style(theme: &Theme) -> LayoutStyle {
    let primary = theme.primary_color.clone();
    let secondary = theme.secondary_color.clone();
    let rule = |width_px: u8, line: LineStyle, color: &str| {
        Some(HeadingRule {
            side: Side::Bottom,
            width_px,
            line,
            color: color.to_string(),
        })
    };

    let mut heading = HeadingStyle::base(theme);
    let mut font_family = theme.font_family.clone();

    let (page_background, page_accent) = match theme.layout {
        ThemeLayout::Modern => {
            heading.rule = rule(2, LineStyle::Solid, &primary);
            ("#ffffff", PageAccent::Plain)
        }
        ThemeLayout::Classic => {
            heading.rule = rule(2, LineStyle::Solid, &primary);
            heading.uppercase = true;
            heading.font_size_px = 14;
            (
                "#ffffff",
                PageAccent::Border {
                    side: Side::Left,
                    width_px: 4,
                    color: primary.clone(),
                },
            )
        }
        ThemeLayout::Minimal => {
            heading.rule = rule(1, LineStyle::Solid, &secondary);
            heading.font_size_px = 15;
            heading.font_weight = 500;
            (
                "#ffffff",
                PageAccent::Border {
                    side: Side::Top,
                    width_px: 2,
                    color: primary.clone(),
                },
            )
        }
        ThemeLayout::Creative => {
            heading.text_gradient = Some((primary.clone(), secondary.clone()));
            heading.font_size_px = 18;
            heading.font_weight = 700;
            (
                "#fafafa",
                PageAccent::Gradient {
                    from: "#ffffff".to_string(),
                    to: "#f8fafc".to_string(),
                },
            )
        }
        ThemeLayout::Executive => {
            heading.banner_background = Some(primary.clone());
            heading.color = "#ffffff".to_string();
            heading.font_size_px = 15;
            (
                "#ffffff",
                PageAccent::InsetOutline {
                    color: "#e5e7eb".to_string(),
                },
            )
        }
        ThemeLayout::Tech => {
            heading.rule = Some(HeadingRule {
                side: Side::Left,
                width_px: 4,
                line: LineStyle::Solid,
                color: primary.clone(),
            });
            heading.font_size_px = 14;
            font_family = MONOSPACE_STACK.to_string();
            ("#fafafa", PageAccent::Plain)
        }
        ThemeLayout::Elegant => {
            heading.rule = rule(2, LineStyle::Dotted, &primary);
            heading.font_size_px = 17;
            heading.italic = true;
            (
                "#fffef7",
                PageAccent::Border {
                    side: Side::Bottom,
                    width_px: 3,
                    color: primary.clone(),
                },
            )
        }
        ThemeLayout::Contemporary => {
            heading.rule = rule(3, LineStyle::Solid, &primary);
            ("#ffffff", PageAccent::Rounded { radius_px: 8 })
        }
    };

    LayoutStyle {
        layout: theme.layout,
        description: theme.layout.description(),
        page_background,
        text_color: DEFAULT_TEXT_COLOR,
        font_family,
        page_accent,
        heading,
    }
}

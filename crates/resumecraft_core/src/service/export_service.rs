//! PDF export job description.
//!
//! Rendering happens outside the core. This module only decides what the
//! renderer receives: file name, page geometry and a normalized snapshot of
//! the document and theme.

use crate::model::document::ResumeDocument;
use crate::model::theme::Theme;
use crate::normalize::normalize_document;
use serde::Serialize;

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;
pub const PAGE_MARGIN_MM: f32 = 5.0;
pub const JPEG_QUALITY: f32 = 0.95;
pub const RENDER_SCALE: u32 = 2;

const FALLBACK_FILE_STEM: &str = "Resume";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSetup {
    pub format: &'static str,
    pub orientation: &'static str,
    pub unit: &'static str,
    pub width_mm: f32,
    pub height_mm: f32,
    /// Top, left, bottom, right.
    pub margins_mm: [f32; 4],
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            format: "a4",
            orientation: "portrait",
            unit: "mm",
            width_mm: A4_WIDTH_MM,
            height_mm: A4_HEIGHT_MM,
            margins_mm: [PAGE_MARGIN_MM; 4],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSetup {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub quality: f32,
    pub scale: u32,
}

impl Default for ImageSetup {
    fn default() -> Self {
        Self {
            kind: "jpeg",
            quality: JPEG_QUALITY,
            scale: RENDER_SCALE,
        }
    }
}

/// Everything a PDF renderer needs for one export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub filename: String,
    pub page: PageSetup,
    pub image: ImageSetup,
    pub document: ResumeDocument,
    pub theme: Theme,
}

/// Builds the export job for `document` rendered with `theme`.
pub fn export_request(document: &ResumeDocument, theme: &Theme) -> ExportRequest {
    ExportRequest {
        filename: export_filename(&document.personal_info.full_name),
        page: PageSetup::default(),
        image: ImageSetup::default(),
        document: normalize_document(document.clone()),
        theme: theme.clone(),
    }
}

/// `<full name>.pdf`, or `Resume.pdf` when the name is blank.
///
/// Path separators and characters rejected by common filesystems become `-`.
pub fn export_filename(full_name: &str) -> String {
    let stem = full_name.trim();
    if stem.is_empty() {
        return format!("{FALLBACK_FILE_STEM}.pdf");
    }
    let stem: String = stem
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            ch if ch.is_control() => '-',
            ch => ch,
        })
        .collect();
    format!("{stem}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_falls_back_when_name_blank() {
        assert_eq!(export_filename(""), "Resume.pdf");
        assert_eq!(export_filename("   "), "Resume.pdf");
        assert_eq!(export_filename(" Ada Lovelace "), "Ada Lovelace.pdf");
        assert_eq!(export_filename("A/B: C"), "A-B- C.pdf");
    }

    #[test]
    fn request_uses_a4_portrait_geometry() {
        let request = export_request(&ResumeDocument::default(), &Theme::default());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["filename"], "Resume.pdf");
        assert_eq!(json["page"]["format"], "a4");
        assert_eq!(json["page"]["orientation"], "portrait");
        assert_eq!(json["page"]["marginsMm"], serde_json::json!([5.0, 5.0, 5.0, 5.0]));
        assert_eq!(json["image"]["type"], "jpeg");
        assert_eq!(json["image"]["scale"], 2);
        assert_eq!(json["theme"]["id"], "modern-blue");
        assert_eq!(json["document"]["sections"].as_array().map(Vec::len), Some(11));
    }
}

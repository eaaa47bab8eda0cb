//! Email share draft for a resume.
//!
//! # Responsibility
//! - Build the subject/body of a prefilled outbound email.
//! - Produce a `mailto:` URL the UI shell can hand to the OS.
//!
//! # Invariants
//! - No network access; output is a pure function of personal info.
//! - Link lines stay in place (empty) when the link is absent, so the body
//!   layout is stable.

use crate::model::document::ResumeDocument;
use crate::model::personal::PersonalInfo;

/// Prefilled email content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDraft {
    pub subject: String,
    pub body: String,
    /// `mailto:?subject=..&body=..` with both parts percent-encoded.
    pub mailto_url: String,
}

/// Builds the share draft for `document`.
pub fn share_draft(document: &ResumeDocument) -> ShareDraft {
    let info = &document.personal_info;
    let subject = format!("My Resume - {}", info.full_name);
    let body = share_body(info);
    let mailto_url = format!(
        "mailto:?subject={}&body={}",
        encode_uri_component(&subject),
        encode_uri_component(&body)
    );
    ShareDraft {
        subject,
        body,
        mailto_url,
    }
}

fn share_body(info: &PersonalInfo) -> String {
    let link_line = |label: &str, link: &Option<String>| match link {
        Some(link) => format!("{label}: {link}"),
        None => String::new(),
    };

    format!(
        "Hi,\n\n\
         Please find my resume attached. You can also view my professional profile at:\n\n\
         {}\n{}\n{}\n\n\
         Best regards,\n{}",
        link_line("LinkedIn", &info.linkedin),
        link_line("GitHub", &info.github),
        link_line("Website", &info.website),
        info.full_name
    )
}

/// Percent-encodes `value` the way browsers' `encodeURIComponent` does.
///
/// Unreserved: ASCII alphanumerics and `-_.!~*'()`. Everything else is
/// encoded as uppercase `%XX` per UTF-8 byte.
pub fn encode_uri_component(value: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push('%');
            encoded.push(HEX[usize::from(byte >> 4)] as char);
            encoded.push(HEX[usize::from(byte & 0x0f)] as char);
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_matches_browser_component_encoding() {
        assert_eq!(encode_uri_component("My Resume - Ada"), "My%20Resume%20-%20Ada");
        assert_eq!(encode_uri_component("a&b=c?d/e"), "a%26b%3Dc%3Fd%2Fe");
        assert_eq!(encode_uri_component("it's (ok)!"), "it's%20(ok)!");
        assert_eq!(encode_uri_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn body_lists_only_present_links() {
        let mut document = ResumeDocument::default();
        document.personal_info.full_name = "Ada Lovelace".to_string();
        document.personal_info.github = Some("https://github.com/ada".to_string());

        let draft = share_draft(&document);
        assert_eq!(draft.subject, "My Resume - Ada Lovelace");
        assert_eq!(
            draft.body,
            "Hi,\n\nPlease find my resume attached. You can also view my professional profile at:\n\n\nGitHub: https://github.com/ada\n\n\nBest regards,\nAda Lovelace"
        );
        assert!(draft
            .mailto_url
            .starts_with("mailto:?subject=My%20Resume%20-%20Ada%20Lovelace&body=Hi%2C%0A%0A"));
    }
}

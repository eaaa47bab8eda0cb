//! Section visibility and ordering helpers.
//!
//! # Invariants
//! - Helpers never add or drop descriptors.
//! - Reordered output carries dense `order` values `1..=N` in display order.

use crate::model::section::{SectionDescriptor, SectionType};

/// Returns descriptors sorted by `order` ascending (stable for ties).
pub fn in_display_order(sections: &[SectionDescriptor]) -> Vec<SectionDescriptor> {
    let mut ordered = sections.to_vec();
    ordered.sort_by_key(|section| section.order);
    ordered
}

/// Enabled descriptors in display order; what both the editor and the
/// preview iterate over.
pub fn visible_sections(sections: &[SectionDescriptor]) -> Vec<SectionDescriptor> {
    in_display_order(sections)
        .into_iter()
        .filter(|section| section.enabled)
        .collect()
}

/// Returns `sections` with the `enabled` flag of `id` flipped.
pub fn toggle_section(sections: &[SectionDescriptor], id: &str) -> Vec<SectionDescriptor> {
    sections
        .iter()
        .map(|section| {
            if section.id == id {
                SectionDescriptor {
                    enabled: !section.enabled,
                    ..section.clone()
                }
            } else {
                section.clone()
            }
        })
        .collect()
}

/// Returns `sections` with `kind` explicitly shown or hidden.
pub fn set_section_enabled(
    sections: &[SectionDescriptor],
    kind: SectionType,
    enabled: bool,
) -> Vec<SectionDescriptor> {
    sections
        .iter()
        .map(|section| {
            if section.kind == kind {
                SectionDescriptor {
                    enabled,
                    ..section.clone()
                }
            } else {
                section.clone()
            }
        })
        .collect()
}

/// Moves the section at display position `from` to display position `to`
/// (both 0-based, clamped) and renumbers every section from 1.
pub fn reorder_sections(
    sections: &[SectionDescriptor],
    from: usize,
    to: usize,
) -> Vec<SectionDescriptor> {
    let mut ordered = in_display_order(sections);
    if ordered.is_empty() {
        return ordered;
    }

    let last = ordered.len() - 1;
    let moved = ordered.remove(from.min(last));
    ordered.insert(to.min(last), moved);
    renumber(ordered)
}

/// Moves the section with `id` so it lands at display position `to`.
///
/// Unknown ids only renumber.
pub fn move_section(sections: &[SectionDescriptor], id: &str, to: usize) -> Vec<SectionDescriptor> {
    let ordered = in_display_order(sections);
    match ordered.iter().position(|section| section.id == id) {
        Some(from) => reorder_sections(&ordered, from, to),
        None => renumber(ordered),
    }
}

fn renumber(sections: Vec<SectionDescriptor>) -> Vec<SectionDescriptor> {
    sections
        .into_iter()
        .enumerate()
        .map(|(index, section)| SectionDescriptor {
            order: index as u32 + 1,
            ..section
        })
        .collect()
}

//! Typed validation errors for section descriptors and themes.

use crate::model::section::SectionType;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for model values received from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    /// A section kind appears more than once in the descriptor list.
    DuplicateSection(SectionType),
    /// A section kind has no descriptor.
    MissingSection(SectionType),
    /// Descriptor order values are not exactly `1..=N`.
    NonDenseOrder { expected: u32, found: u32 },
    /// Two descriptors share the same id.
    DuplicateSectionId(String),
    /// Theme id is blank.
    EmptyThemeId,
    /// Theme color is not a `#rrggbb` literal.
    InvalidColor { field: &'static str, value: String },
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateSection(kind) => {
                write!(f, "section `{}` is declared more than once", kind.as_str())
            }
            Self::MissingSection(kind) => write!(f, "section `{}` is missing", kind.as_str()),
            Self::NonDenseOrder { expected, found } => write!(
                f,
                "section order must be dense from 1: expected {expected}, found {found}"
            ),
            Self::DuplicateSectionId(id) => write!(f, "section id `{id}` is not unique"),
            Self::EmptyThemeId => write!(f, "theme id must not be empty"),
            Self::InvalidColor { field, value } => {
                write!(f, "theme {field} `{value}` is not a #rrggbb color")
            }
        }
    }
}

impl Error for ModelValidationError {}

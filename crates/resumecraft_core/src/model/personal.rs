//! Personal info singleton and its typed partial-merge patch.

use serde::{Deserialize, Serialize};

/// Contact header of the resume.
///
/// Optional link fields are `None` when unset; a blank string is never stored
/// through [`PersonalInfo::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Image encoded as a `data:` URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Partial update for [`PersonalInfo`].
///
/// `None` leaves the field untouched. For optional link fields an empty
/// string clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub profile_image: Option<String>,
}

impl PersonalInfoPatch {
    pub fn full_name(value: impl Into<String>) -> Self {
        Self {
            full_name: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self {
            email: Some(value.into()),
            ..Self::default()
        }
    }

    /// Returns whether applying this patch can change anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl PersonalInfo {
    /// Merges `patch` into a copy of `self`.
    pub fn apply(&self, patch: PersonalInfoPatch) -> Self {
        let mut next = self.clone();
        if let Some(value) = patch.full_name {
            next.full_name = value;
        }
        if let Some(value) = patch.email {
            next.email = value;
        }
        if let Some(value) = patch.phone {
            next.phone = value;
        }
        if let Some(value) = patch.location {
            next.location = value;
        }
        if let Some(value) = patch.website {
            next.website = non_blank(value);
        }
        if let Some(value) = patch.linkedin {
            next.linkedin = non_blank(value);
        }
        if let Some(value) = patch.github {
            next.github = non_blank(value);
        }
        if let Some(value) = patch.profile_image {
            next.profile_image = non_blank(value);
        }
        next
    }
}

pub(crate) fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

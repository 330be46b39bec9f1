//! Names of the fields collected by the signup wizard.

use serde::{Deserialize, Serialize};

/// Every field the wizard collects, across all steps
///
/// Error maps and step ownership tables are keyed by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Phone,
    Password,
    ConfirmPassword,
    Code,
    Services,
    Address,
    ExperienceYears,
    VisitingCharge,
    Bio,
    WorkPhotos,
    Selfie,
    Cnic,
    CnicFront,
    CnicBack,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Phone => "phone",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
            FieldName::Code => "code",
            FieldName::Services => "services",
            FieldName::Address => "address",
            FieldName::ExperienceYears => "experienceYears",
            FieldName::VisitingCharge => "visitingCharge",
            FieldName::Bio => "bio",
            FieldName::WorkPhotos => "workPhotos",
            FieldName::Selfie => "selfie",
            FieldName::Cnic => "cnic",
            FieldName::CnicFront => "cnicFront",
            FieldName::CnicBack => "cnicBack",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

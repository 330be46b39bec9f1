//! Field edits accepted by the wizard controller.

use crate::domain::value_objects::{ExperienceYears, FieldName, ImageBlob, ResolvedLocation};

/// A single user edit to the field store
///
/// Every edit targets exactly one field; applying it clears that field's
/// pending validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    FullName(String),
    Phone(String),
    Password(String),
    ConfirmPassword(String),

    /// A key pressed in one of the code boxes
    CodeDigit { position: usize, digit: char },
    /// Backspace in one of the code boxes
    CodeBackspace { position: usize },
    /// A full code pasted into the first box
    CodePaste(String),

    ToggleSubService {
        service_id: String,
        service_name: String,
        sub_service_id: String,
    },
    RemoveService { service_id: String },

    /// Free-text address; coordinates are left as they are
    Address(String),
    /// Address and coordinates from a lookup
    Location(ResolvedLocation),

    ExperienceYears(ExperienceYears),
    VisitingCharge(u32),
    Bio(String),

    AddWorkPhoto(ImageBlob),
    RemoveWorkPhoto(usize),

    /// A selfie chosen from a file; releases any live camera
    UploadSelfie(ImageBlob),
    ClearSelfie,

    /// Raw CNIC input, reformatted to 5-7-1 on entry
    CnicInput(String),
    CnicFront(ImageBlob),
    CnicBack(ImageBlob),
    RemoveCnicFront,
    RemoveCnicBack,
}

impl FieldEdit {
    pub fn field(&self) -> FieldName {
        match self {
            FieldEdit::FullName(_) => FieldName::FullName,
            FieldEdit::Phone(_) => FieldName::Phone,
            FieldEdit::Password(_) => FieldName::Password,
            FieldEdit::ConfirmPassword(_) => FieldName::ConfirmPassword,
            FieldEdit::CodeDigit { .. } | FieldEdit::CodeBackspace { .. } | FieldEdit::CodePaste(_) => {
                FieldName::Code
            }
            FieldEdit::ToggleSubService { .. } | FieldEdit::RemoveService { .. } => FieldName::Services,
            FieldEdit::Address(_) | FieldEdit::Location(_) => FieldName::Address,
            FieldEdit::ExperienceYears(_) => FieldName::ExperienceYears,
            FieldEdit::VisitingCharge(_) => FieldName::VisitingCharge,
            FieldEdit::Bio(_) => FieldName::Bio,
            FieldEdit::AddWorkPhoto(_) | FieldEdit::RemoveWorkPhoto(_) => FieldName::WorkPhotos,
            FieldEdit::UploadSelfie(_) | FieldEdit::ClearSelfie => FieldName::Selfie,
            FieldEdit::CnicInput(_) => FieldName::Cnic,
            FieldEdit::CnicFront(_) | FieldEdit::RemoveCnicFront => FieldName::CnicFront,
            FieldEdit::CnicBack(_) | FieldEdit::RemoveCnicBack => FieldName::CnicBack,
        }
    }

    /// Convenience for selecting or deselecting a sub-service
    pub fn toggle_sub_service(
        service_id: impl Into<String>,
        service_name: impl Into<String>,
        sub_service_id: impl Into<String>,
    ) -> Self {
        FieldEdit::ToggleSubService {
            service_id: service_id.into(),
            service_name: service_name.into(),
            sub_service_id: sub_service_id.into(),
        }
    }
}
